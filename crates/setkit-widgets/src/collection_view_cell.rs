//! Item cell for collection views

use crate::view::View;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::{Settable, Setter};
use setkit_macros::Setters;

#[derive(Debug, Clone, Default, Setters)]
pub struct CollectionViewCell {
    #[set(parent)]
    pub view: View,
    /// Selection state, shown through the selected background view
    pub selected: bool,
    pub highlighted: bool,
    #[set(skip)]
    content_view: View,
    #[set(skip)]
    background_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    selected_background_view: Option<Box<dyn Widget>>,
}

impl CollectionViewCell {
    pub fn content_view(&self) -> &View {
        &self.content_view
    }

    pub fn content_view_mut(&mut self) -> &mut View {
        &mut self.content_view
    }

    pub fn background_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.background_view.as_deref()
    }

    pub fn selected_background_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.selected_background_view.as_deref()
    }

    /// Background currently drawn behind the content
    pub fn visible_background(&self) -> Option<&(dyn Widget + 'static)> {
        if self.selected || self.highlighted {
            self.selected_background_view()
                .or_else(|| self.background_view())
        } else {
            self.background_view()
        }
    }
}

pub trait CollectionViewCellSetterExt: Sized {
    fn content_view_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, View>);

    fn background_view(self, view: impl Widget) -> Self;

    fn selected_background_view(self, view: impl Widget) -> Self;
}

impl<'a, B> CollectionViewCellSetterExt for Setter<'a, B>
where
    B: AsMut<CollectionViewCell> + ?Sized,
{
    fn content_view_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, View>),
    {
        configure(target_mut::<CollectionViewCell, _>(&mut self).content_view.set());
        self
    }

    fn background_view(mut self, view: impl Widget) -> Self {
        target_mut::<CollectionViewCell, _>(&mut self).background_view = Some(Box::new(view));
        self
    }

    fn selected_background_view(mut self, view: impl Widget) -> Self {
        target_mut::<CollectionViewCell, _>(&mut self).selected_background_view =
            Some(Box::new(view));
        self
    }
}
