//! Chainable configuration wrapper
//!
//! A [`Setter`] borrows one configuration target and nothing else. Widget
//! families add their configuration methods to it through extension traits,
//! either generated by `#[derive(Setters)]` or written by hand for method-style
//! setters. Every method applies its change immediately and returns the same
//! wrapper, so calls chain left to right over a single target:
//!
//! ```
//! use setkit_core::setter::{Settable, Setter};
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: i32,
//! }
//!
//! impl Settable for Counter {}
//!
//! trait CounterSetters {
//!     fn value(self, value: i32) -> Self;
//! }
//!
//! impl CounterSetters for Setter<'_, Counter> {
//!     fn value(mut self, value: i32) -> Self {
//!         self.base_mut().value = value;
//!         self
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! counter.set().value(1).value(2);
//! assert_eq!(counter.value, 2);
//! ```

use std::fmt;

/// Fluent configuration view over a borrowed target.
///
/// The wrapper owns nothing: dropping it leaves the target untouched apart
/// from the changes already applied through it.
pub struct Setter<'a, B: ?Sized> {
    base: &'a mut B,
}

impl<'a, B: ?Sized> Setter<'a, B> {
    /// Wrap a target.
    #[inline]
    pub fn new(base: &'a mut B) -> Self {
        Self { base }
    }

    /// The target being configured.
    #[inline]
    pub fn base(&self) -> &B {
        self.base
    }

    /// Mutable access to the target, for extension trait bodies.
    #[inline]
    pub fn base_mut(&mut self) -> &mut B {
        self.base
    }

    /// Give the borrow back, ending the chain.
    #[inline]
    pub fn into_inner(self) -> &'a mut B {
        self.base
    }
}

impl<B: ?Sized + fmt::Debug> fmt::Debug for Setter<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Setter").field(&self.base).finish()
    }
}

/// A type that supports fluent configuration.
///
/// Opting in only takes an empty impl; `set` is provided.
pub trait Settable {
    /// Start a configuration chain on `self`.
    #[inline]
    fn set(&mut self) -> Setter<'_, Self> {
        Setter::new(self)
    }
}

/// Start a configuration chain on any value, whether or not it is [`Settable`].
#[inline]
pub fn set<B: ?Sized>(base: &mut B) -> Setter<'_, B> {
    Setter::new(base)
}
