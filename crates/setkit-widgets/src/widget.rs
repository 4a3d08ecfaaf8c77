//! Base widget trait and common functionality

use crate::view::View;
use setkit_core::setter::{Settable, Setter};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique widget identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Shared callback invoked by controls, menus and alert actions
#[derive(Clone)]
pub struct Action(Arc<dyn Fn() + Send + Sync>);

impl Action {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Run the callback
    pub fn call(&self) {
        (self.0)()
    }

    /// Whether both handles share one callback
    pub fn ptr_eq(&self, other: &Action) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Base trait for every widget in a view hierarchy
///
/// Implemented for any clonable type that can be viewed as a [`View`], which
/// covers every widget family in this crate. Trait objects are what
/// subview lists and accessory slots hold.
pub trait Widget: Any + fmt::Debug + Send + Sync {
    /// The view this widget is built on
    fn view(&self) -> &View;

    /// Mutable access to the underlying view
    fn view_mut(&mut self) -> &mut View;

    /// Get widget as Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget as Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone the widget
    fn clone_box(&self) -> Box<dyn Widget>;

    /// Concrete type name, for logs
    fn type_name(&self) -> &'static str;
}

impl<T> Widget for T
where
    T: AsRef<View> + AsMut<View> + Clone + fmt::Debug + Send + Sync + 'static,
{
    fn view(&self) -> &View {
        AsRef::<View>::as_ref(self)
    }

    fn view_mut(&mut self) -> &mut View {
        AsMut::<View>::as_mut(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn Widget {
    /// Whether the widget is a `T`
    pub fn is<T: Widget>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Box<dyn Widget> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl AsRef<View> for dyn Widget {
    fn as_ref(&self) -> &View {
        self.view()
    }
}

impl AsMut<View> for dyn Widget {
    fn as_mut(&mut self) -> &mut View {
        self.view_mut()
    }
}

impl Settable for dyn Widget {}

/// The family a setter's target is viewed as
///
/// Shorthand used by the hand-written extension traits.
#[inline]
pub(crate) fn target_mut<'s, T, B>(setter: &'s mut Setter<'_, B>) -> &'s mut T
where
    B: AsMut<T> + ?Sized,
{
    AsMut::<T>::as_mut(setter.base_mut())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::view::ViewSetters;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_widget_ids_are_unique() {
        assert_ne!(WidgetId::new(), WidgetId::new());
        assert_ne!(View::default().id(), View::default().id());
    }

    #[test]
    fn test_action_call_and_identity() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let action = Action::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let shared = action.clone();
        shared.call();
        action.call();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(action.ptr_eq(&shared));
        assert!(!action.ptr_eq(&Action::new(|| {})));
    }

    #[test]
    fn test_downcast_boxed_widget() {
        let mut boxed: Box<dyn Widget> = Box::new(Label::default());

        assert!(boxed.is::<Label>());
        assert!(!boxed.is::<View>());
        assert!(boxed.type_name().ends_with("Label"));

        if let Some(label) = boxed.downcast_mut::<Label>() {
            label.number_of_lines = 3;
        }
        assert_eq!(boxed.downcast_ref::<Label>().map(|l| l.number_of_lines), Some(3));
    }

    #[test]
    fn test_trait_object_accepts_view_setters() {
        let mut boxed: Box<dyn Widget> = Box::new(Label::default());
        boxed.set().alpha(0.25).tag(9);

        assert_eq!(boxed.view().alpha, 0.25);
        assert_eq!(boxed.view().tag, 9);
    }

    #[test]
    fn test_boxed_widgets_clone_deeply() {
        let mut original: Box<dyn Widget> = Box::new(View::default());
        let copy = original.clone();
        original.view_mut().alpha = 0.0;

        assert_eq!(copy.view().alpha, 1.0);
    }
}
