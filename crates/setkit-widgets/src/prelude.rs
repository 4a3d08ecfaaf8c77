//! Prelude module for SetKit widgets
//!
//! This module re-exports every widget family together with its setter traits,
//! so a single `use setkit_widgets::prelude::*;` brings the whole chainable
//! API into scope.

// Re-export core types that are commonly used with widgets
pub use setkit_core::prelude::*;
pub use setkit_core::shape::CornerStyle;

// Widget trait and common types
pub use crate::widget::{Action, Widget, WidgetId};
pub use setkit_macros::Setters;

// Views and controls
pub use crate::view::{
    ContentMode, HoverEffect, HoverStyle, Interaction, Layer, LayerSetters, View, ViewSetterExt,
    ViewSetters,
};
pub use crate::control::{
    ContentHorizontalAlignment, ContentVerticalAlignment, Control, ControlEvents,
    ControlSetterExt, ControlSetters, ControlState,
};
pub use crate::label::{Label, LabelSetterExt, LabelSetters, LineBreakMode};
pub use crate::image_view::{ImageView, ImageViewSetterExt, ImageViewSetters};
pub use crate::button::{Button, ButtonRole, ButtonSetterExt, ButtonSetters};
pub use crate::menu::{Menu, MenuAction, MenuActionSetters, MenuSetters};
pub use crate::activity_indicator::{
    ActivityIndicator, ActivityIndicatorSetterExt, ActivityIndicatorSetters,
    ActivityIndicatorStyle,
};
pub use crate::progress_view::{
    ProgressView, ProgressViewSetterExt, ProgressViewSetters, ProgressViewStyle,
};
pub use crate::switch::{Switch, SwitchSetterExt, SwitchSetters, SwitchStyle};
pub use crate::segmented_control::{
    Segment, SegmentedControl, SegmentedControlSetterExt, SegmentedControlSetters,
};
pub use crate::page_control::{
    PageControl, PageControlBackgroundStyle, PageControlDirection, PageControlSetters,
};
pub use crate::date_picker::{
    DatePicker, DatePickerMode, DatePickerSetterExt, DatePickerSetters, DatePickerStyle,
};
pub use crate::picker_view::{PickerView, PickerViewSetterExt, PickerViewSetters};

// Text input
pub use crate::text_field::{
    AutocapitalizationType, AutocorrectionType, BorderStyle, KeyboardType, ReturnKeyType,
    TextField, TextFieldSetterExt, TextFieldSetters, ViewMode,
};
pub use crate::search_text_field::{SearchTextField, SearchTextFieldSetters, SearchToken};
pub use crate::text_view::{DataDetectorTypes, TextView, TextViewSetterExt, TextViewSetters};

// Scrolling and lists
pub use crate::scroll_view::{
    DecelerationRate, IndicatorStyle, KeyboardDismissMode, ScrollView, ScrollViewSetterExt,
    ScrollViewSetters,
};
pub use crate::stack_view::{
    StackAlignment, StackDistribution, StackView, StackViewSetterExt, StackViewSetters,
};
pub use crate::reuse::ReuseQueue;
pub use crate::table_view_cell::{
    AccessoryType, CellFocusStyle, CellSelectionStyle, TableViewCell, TableViewCellSetterExt,
    TableViewCellSetters,
};
pub use crate::table_view::{
    SeparatorStyle, TableView, TableViewSetterExt, TableViewSetters, TableViewStyle,
    AUTOMATIC_DIMENSION,
};
pub use crate::collection_view_cell::{
    CollectionViewCell, CollectionViewCellSetterExt, CollectionViewCellSetters,
};
pub use crate::collection_view::{
    CollectionView, CollectionViewSetterExt, CollectionViewSetters, FlowLayout,
    FlowLayoutSetters, ReorderingCadence,
};

// Bars
pub use crate::bar_item::{
    BarButtonItem, BarButtonItemSetters, BarButtonItemStyle, BarStyle, SystemItem, TabBarItem,
    TabBarItemSetters,
};
pub use crate::appearance::{
    BarAppearance, BarAppearanceSetterExt, BarAppearanceSetters, BlurEffect, TextAttributes,
    TextAttributesSetters,
};
pub use crate::navigation_bar::{NavigationBar, NavigationBarSetterExt, NavigationBarSetters};
pub use crate::navigation_item::{
    BackButtonDisplayMode, LargeTitleDisplayMode, NavigationItem, NavigationItemSetterExt,
    NavigationItemSetters,
};
pub use crate::tab_bar::{ItemPositioning, TabBar, TabBarSetters};
pub use crate::toolbar::{Toolbar, ToolbarSetterExt, ToolbarSetters};
pub use crate::search_bar::{SearchBar, SearchBarSetterExt, SearchBarSetters, SearchBarStyle};

// Controllers
pub use crate::view_controller::{
    Controller, ModalPresentationStyle, ModalTransitionStyle, PendingUpdates, ViewController,
    ViewControllerSetterExt, ViewControllerSetters,
};
pub use crate::navigation_controller::{
    NavigationController, NavigationControllerSetterExt, NavigationControllerSetters,
};
pub use crate::tab_bar_controller::{
    TabBarController, TabBarControllerSetterExt, TabBarControllerSetters,
};
pub use crate::search_controller::{
    SearchController, SearchControllerSetterExt, SearchControllerSetters,
};
pub use crate::alert_controller::{
    AlertAction, AlertActionSetters, AlertActionStyle, AlertController, AlertControllerSetterExt,
    AlertControllerSetters, AlertControllerStyle, AlertSeverity,
};
pub use crate::image_picker_controller::{
    CameraCaptureMode, CameraDevice, CameraFlashMode, ImagePickerController,
    ImagePickerControllerSetterExt, ImagePickerControllerSetters, SourceType, VideoQuality,
    MEDIA_TYPE_IMAGE, MEDIA_TYPE_MOVIE,
};
pub use crate::video_editor_controller::{VideoEditorController, VideoEditorControllerSetters};
