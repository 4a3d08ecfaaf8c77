//! Text field with search tokens

use crate::control::Control;
use crate::text_field::TextField;
use crate::view::View;
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

/// Atomic token shown ahead of the typed text
#[derive(Debug, Clone, PartialEq)]
pub struct SearchToken {
    pub text: String,
    pub icon: Option<Image>,
}

impl SearchToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Image) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[derive(Debug, Clone, Setters)]
pub struct SearchTextField {
    #[set(parent, ancestors(Control, View))]
    pub text_field: TextField,
    #[set(feature = "search-tokens")]
    pub tokens: Vec<SearchToken>,
    #[set(strip_option, feature = "search-tokens")]
    pub token_background_color: Option<Color>,
    #[set(feature = "search-tokens")]
    pub allows_deleting_tokens: bool,
    #[set(feature = "search-tokens")]
    pub allows_copying_tokens: bool,
}

impl Default for SearchTextField {
    fn default() -> Self {
        let mut text_field = TextField::default();
        text_field.placeholder = Some("Search".to_string());
        Self {
            text_field,
            tokens: Vec::new(),
            token_background_color: None,
            allows_deleting_tokens: true,
            allows_copying_tokens: true,
        }
    }
}

impl SearchTextField {
    /// Remove the last token, as backspace over an empty query does
    ///
    /// Nothing happens while `allows_deleting_tokens` is off.
    pub fn delete_last_token(&mut self) -> Option<SearchToken> {
        if !self.allows_deleting_tokens {
            return None;
        }
        self.tokens.pop()
    }
}
