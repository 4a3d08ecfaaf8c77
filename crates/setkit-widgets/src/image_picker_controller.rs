//! Photo library and camera picker

use crate::navigation_controller::NavigationController;
use crate::view_controller::ViewController;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::Setter;
use setkit_core::types::Transform;
use setkit_macros::Setters;
use std::time::Duration;

/// Uniform type identifier for still images
pub const MEDIA_TYPE_IMAGE: &str = "public.image";
/// Uniform type identifier for movies
pub const MEDIA_TYPE_MOVIE: &str = "public.movie";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    #[default]
    PhotoLibrary,
    Camera,
    SavedPhotosAlbum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraCaptureMode {
    #[default]
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraDevice {
    #[default]
    Rear,
    Front,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFlashMode {
    Off,
    #[default]
    Auto,
    On,
}

/// Recording and transcoding quality for captured or edited video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoQuality {
    High,
    #[default]
    Medium,
    Low,
    Vga640x480,
    Iframe1280x720,
    Iframe960x540,
}

/// Longest video the pickers record or trim to by default
pub const DEFAULT_VIDEO_MAXIMUM_DURATION: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Setters)]
pub struct ImagePickerController {
    #[set(parent, ancestors(ViewController))]
    pub navigation_controller: NavigationController,
    pub source_type: SourceType,
    pub allows_editing: bool,
    /// Uniform type identifiers the picker offers
    pub media_types: Vec<String>,
    pub camera_capture_mode: CameraCaptureMode,
    pub camera_device: CameraDevice,
    pub camera_flash_mode: CameraFlashMode,
    pub shows_camera_controls: bool,
    pub camera_view_transform: Transform,
    pub video_maximum_duration: Duration,
    pub video_quality: VideoQuality,
    #[set(skip)]
    camera_overlay_view: Option<Box<dyn Widget>>,
}

impl Default for ImagePickerController {
    fn default() -> Self {
        Self {
            navigation_controller: NavigationController::default(),
            source_type: SourceType::PhotoLibrary,
            allows_editing: false,
            media_types: vec![MEDIA_TYPE_IMAGE.to_string()],
            camera_capture_mode: CameraCaptureMode::Photo,
            camera_device: CameraDevice::Rear,
            camera_flash_mode: CameraFlashMode::Auto,
            shows_camera_controls: true,
            camera_view_transform: Transform::identity(),
            video_maximum_duration: DEFAULT_VIDEO_MAXIMUM_DURATION,
            video_quality: VideoQuality::Medium,
            camera_overlay_view: None,
        }
    }
}

impl ImagePickerController {
    pub fn camera_overlay_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.camera_overlay_view.as_deref()
    }

    /// Whether the picker offers movies
    pub fn allows_video(&self) -> bool {
        self.media_types.iter().any(|t| t == MEDIA_TYPE_MOVIE)
    }
}

pub trait ImagePickerControllerSetterExt: Sized {
    /// Custom view drawn over the camera preview
    fn camera_overlay_view(self, view: impl Widget) -> Self;
}

impl<'a, B> ImagePickerControllerSetterExt for Setter<'a, B>
where
    B: AsMut<ImagePickerController> + ?Sized,
{
    fn camera_overlay_view(mut self, view: impl Widget) -> Self {
        let picker = target_mut::<ImagePickerController, _>(&mut self);
        if picker.source_type != SourceType::Camera {
            tracing::debug!(
                target: "setkit::setter",
                widget = "ImagePickerController",
                source = ?picker.source_type,
                "camera overlay set for a non-camera source"
            );
        }
        picker.camera_overlay_view = Some(Box::new(view));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation_controller::NavigationControllerSetterExt;
    use crate::view::View;
    use crate::view_controller::ViewControllerSetters;
    use setkit_core::setter::Settable;

    #[test]
    fn test_camera_configuration() {
        let mut picker = ImagePickerController::default();
        picker
            .set()
            .source_type(SourceType::Camera)
            .media_types(vec![MEDIA_TYPE_IMAGE.into(), MEDIA_TYPE_MOVIE.into()])
            .camera_device(CameraDevice::Front)
            .camera_flash_mode(CameraFlashMode::Off)
            .video_maximum_duration(Duration::from_secs(30))
            .video_quality(VideoQuality::High)
            .camera_overlay_view(View::default());

        assert!(picker.allows_video());
        assert_eq!(picker.camera_device, CameraDevice::Front);
        assert_eq!(picker.video_maximum_duration, Duration::from_secs(30));
        assert!(picker.camera_overlay_view().is_some());
    }

    #[test]
    fn test_inherited_controller_setters() {
        let mut picker = ImagePickerController::default();
        picker
            .set()
            .title("Choose photo")
            .navigation_bar_hidden(true)
            .allows_editing(true);

        assert_eq!(
            picker.navigation_controller.view_controller.title.as_deref(),
            Some("Choose photo")
        );
        assert!(picker.navigation_controller.is_navigation_bar_hidden());
        assert!(picker.allows_editing);
        assert!(!picker.allows_video());
    }
}
