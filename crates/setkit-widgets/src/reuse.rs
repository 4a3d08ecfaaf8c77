//! Cell registration and reuse shared by table and collection views

use crate::widget::Widget;
use std::collections::HashMap;

/// Constructor for a registered cell type
pub type CellFactory = fn() -> Box<dyn Widget>;

fn make_cell<C: Widget + Default>() -> Box<dyn Widget> {
    Box::new(C::default())
}

/// Registered cell types and recycled cells, keyed by reuse identifier
#[derive(Debug, Clone, Default)]
pub struct ReuseQueue {
    factories: HashMap<String, CellFactory>,
    pool: HashMap<String, Vec<Box<dyn Widget>>>,
}

impl ReuseQueue {
    /// Register `C` under `identifier`, replacing any earlier registration
    pub fn register<C: Widget + Default>(&mut self, identifier: impl Into<String>) {
        let identifier = identifier.into();
        tracing::trace!(
            target: "setkit::widgets",
            %identifier,
            cell = std::any::type_name::<C>(),
            "register cell"
        );
        self.factories.insert(identifier, make_cell::<C>);
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Take a recycled cell, or build a fresh one from the registered type
    ///
    /// Returns `None` when nothing is registered under `identifier`.
    pub fn dequeue(&mut self, identifier: &str) -> Option<Box<dyn Widget>> {
        if let Some(cell) = self.pool.get_mut(identifier).and_then(Vec::pop) {
            return Some(cell);
        }
        match self.factories.get(identifier) {
            Some(factory) => Some(factory()),
            None => {
                tracing::warn!(
                    target: "setkit::widgets",
                    identifier,
                    "no cell registered for reuse identifier"
                );
                None
            }
        }
    }

    /// Return a cell to the pool once it scrolls out of sight
    pub fn enqueue(&mut self, identifier: &str, cell: Box<dyn Widget>) {
        self.pool.entry(identifier.to_string()).or_default().push(cell);
    }

    /// Recycled cells waiting under `identifier`
    pub fn pooled(&self, identifier: &str) -> usize {
        self.pool.get(identifier).map_or(0, Vec::len)
    }
}
