// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use hashbrown::HashMap;
use log::{debug, trace};

use crate::swipe::SwipeRow;

/// A row shared between its owner and a [`SwipeRegistry`].
pub type SharedRow = Rc<RefCell<SwipeRow>>;

/// Handle of a row inside a [`SwipeRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// Keeps at most one swipe row open at a time.
///
/// The registry holds weak references only: dropping a row's last [`SharedRow`]
/// removes it on the next pass over the registry.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use tactile_scroll::{SwipeConfig, SwipeRegistry, SwipeRow};
///
/// let a = Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(120.0))));
/// let b = Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(120.0))));
/// let mut registry = SwipeRegistry::new();
/// let id_a = registry.register(&a);
/// let id_b = registry.register(&b);
///
/// a.borrow_mut().open();
/// assert_eq!(registry.close_others(id_b), 1);
/// assert!(!a.borrow().is_open());
/// # let _ = id_a;
/// ```
#[derive(Debug, Default)]
pub struct SwipeRegistry {
    rows: HashMap<RowId, Weak<RefCell<SwipeRow>>>,
    next_id: u64,
}

impl SwipeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `row` and returns its handle.
    pub fn register(&mut self, row: &SharedRow) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, Rc::downgrade(row));
        id
    }

    /// Removes a row. Unknown handles are ignored.
    pub fn unregister(&mut self, id: RowId) {
        self.rows.remove(&id);
    }

    /// Number of registered entries, including rows dropped since the last pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops entries whose row no longer exists.
    pub fn prune(&mut self) {
        self.rows.retain(|_, row| row.strong_count() > 0);
    }

    /// Closes every open row except `except` and returns how many were closed.
    ///
    /// Rows that are currently borrowed are skipped.
    pub fn close_others(&mut self, except: RowId) -> usize {
        let mut closed = 0;
        self.rows.retain(|&id, weak| {
            let Some(row) = weak.upgrade() else {
                trace!("pruning dropped swipe row {id:?}");
                return false;
            };
            if id == except {
                return true;
            }
            let Ok(mut row) = row.try_borrow_mut() else {
                return true;
            };
            if row.is_open() {
                row.close();
                closed += 1;
            }
            true
        });
        if closed > 0 {
            debug!("closed {closed} swipe rows for {except:?}");
        }
        closed
    }

    /// Ticks every live row, closing the others when one activated.
    ///
    /// Activations are consumed from [`SwipeRow::take_activation`]; the row's
    /// own [`SwipeEvent::Activated`](crate::SwipeEvent::Activated) stays
    /// queued for its host.
    pub fn tick(&mut self, now: u64) {
        let mut activated = None;
        self.rows.retain(|&id, weak| {
            let Some(row) = weak.upgrade() else {
                return false;
            };
            if let Ok(mut row) = row.try_borrow_mut() {
                row.tick(now);
                if row.take_activation() {
                    activated = Some(id);
                }
            }
            true
        });
        if let Some(id) = activated {
            self.close_others(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use super::SwipeRegistry;
    use crate::{SwipeConfig, SwipeRow};

    fn row() -> Rc<RefCell<SwipeRow>> {
        Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(100.0))))
    }

    #[test]
    fn dropped_rows_are_pruned_lazily() {
        let mut registry = SwipeRegistry::new();
        let a = row();
        let b = row();
        let id_a = registry.register(&a);
        registry.register(&b);
        drop(b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.close_others(id_a), 0);
        assert_eq!(registry.len(), 1);

        let c = row();
        registry.register(&c);
        drop(c);
        registry.prune();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn borrowed_rows_are_skipped() {
        let mut registry = SwipeRegistry::new();
        let a = row();
        let b = row();
        let id_a = registry.register(&a);
        registry.register(&b);
        b.borrow_mut().open();
        {
            let _held = b.borrow();
            assert_eq!(registry.close_others(id_a), 0);
        }
        assert_eq!(registry.close_others(id_a), 1);
    }

    #[test]
    fn unregister_forgets_the_row() {
        let mut registry = SwipeRegistry::new();
        let a = row();
        let id = registry.register(&a);
        registry.unregister(id);
        assert!(registry.is_empty());
    }
}
