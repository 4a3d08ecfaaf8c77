//! Video trimming and transcoding controller

use crate::image_picker_controller::{VideoQuality, DEFAULT_VIDEO_MAXIMUM_DURATION};
use crate::navigation_controller::NavigationController;
use crate::view_controller::ViewController;
use setkit_macros::Setters;
use std::path::{Path, PathBuf};
use std::time::Duration;

const EDITABLE_EXTENSIONS: &[&str] = &["mov", "mp4", "m4v"];

#[derive(Debug, Clone, Setters)]
pub struct VideoEditorController {
    #[set(parent, ancestors(ViewController))]
    pub navigation_controller: NavigationController,
    #[set(into, strip_option)]
    pub video_path: Option<PathBuf>,
    pub video_maximum_duration: Duration,
    pub video_quality: VideoQuality,
}

impl Default for VideoEditorController {
    fn default() -> Self {
        Self {
            navigation_controller: NavigationController::default(),
            video_path: None,
            video_maximum_duration: DEFAULT_VIDEO_MAXIMUM_DURATION,
            video_quality: VideoQuality::Medium,
        }
    }
}

impl VideoEditorController {
    /// Whether a file looks like a movie the editor can open
    pub fn can_edit_video_at_path(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                EDITABLE_EXTENSIONS
                    .iter()
                    .any(|editable| ext.eq_ignore_ascii_case(editable))
            })
    }

    /// Whether the configured video can be opened
    pub fn is_ready(&self) -> bool {
        self.video_path
            .as_deref()
            .is_some_and(Self::can_edit_video_at_path)
    }
}
