//! Menus attached to buttons and bar items

use crate::widget::Action;
use setkit_core::types::Image;
use setkit_macros::Setters;

/// One selectable entry of a [`Menu`]
#[derive(Debug, Clone, Setters)]
pub struct MenuAction {
    #[set(into)]
    pub title: String,
    #[set(strip_option)]
    pub image: Option<Image>,
    pub destructive: bool,
    pub disabled: bool,
    #[set(skip)]
    pub handler: Action,
}

impl MenuAction {
    pub fn new(title: impl Into<String>, handler: Action) -> Self {
        Self {
            title: title.into(),
            image: None,
            destructive: false,
            disabled: false,
            handler,
        }
    }

    /// Run the handler unless the entry is disabled
    pub fn perform(&self) -> bool {
        if self.disabled {
            return false;
        }
        self.handler.call();
        true
    }
}

#[derive(Debug, Clone, Default, Setters)]
pub struct Menu {
    #[set(into)]
    pub title: String,
    pub children: Vec<MenuAction>,
}

impl Menu {
    pub fn new(title: impl Into<String>, children: Vec<MenuAction>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setkit_core::setter::Settable;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_disabled_entries_do_not_fire() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let mut entry = MenuAction::new("Delete", Action::new(move || flag.store(true, Ordering::SeqCst)));
        entry.set().destructive(true).disabled(true);

        assert!(!entry.perform());
        assert!(!fired.load(Ordering::SeqCst));

        entry.set().disabled(false);
        assert!(entry.perform());
        assert!(fired.load(Ordering::SeqCst));
    }
}
