//! Per-slot callback registry.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::ClickType;

/// Handler invoked when a registered slot is clicked.
///
/// Receives the destination slot index and the click kind. Returning `false`
/// asks the dispatcher to cancel the interaction.
pub type SlotClickHandler = Arc<dyn Fn(usize, ClickType) -> bool + Send + Sync>;

/// Handler invoked when a registered slot's contents change.
///
/// Returning `false` asks the dispatcher to roll the change back.
pub type SlotChangeHandler = Arc<dyn Fn(usize) -> bool + Send + Sync>;

/// Handler invoked when a view covering the registered slots is closed.
pub type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// Identifies a registered callback so it can be unregistered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u32);

struct Entry<H> {
    id: CallbackId,
    handler: H,
}

/// Click/change/close handlers keyed by the destination slot indices they
/// apply to.
///
/// Dispatch is not performed here; the server's container layer reads the
/// registered handlers and invokes them on real viewer interactions.
#[derive(Default)]
pub struct MenuCallbacks {
    next_id: u32,
    click: FxHashMap<usize, Vec<Entry<SlotClickHandler>>>,
    change: FxHashMap<usize, Vec<Entry<SlotChangeHandler>>>,
    close: FxHashMap<usize, Vec<Entry<CloseHandler>>>,
}

impl MenuCallbacks {
    /// Creates an empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a click handler for the given slots.
    pub fn register_click(&mut self, slots: &[usize], handler: SlotClickHandler) -> CallbackId {
        let id = self.allocate_id();
        for &slot in slots {
            self.click.entry(slot).or_default().push(Entry {
                id,
                handler: Arc::clone(&handler),
            });
        }
        id
    }

    /// Registers a change handler for the given slots.
    pub fn register_change(&mut self, slots: &[usize], handler: SlotChangeHandler) -> CallbackId {
        let id = self.allocate_id();
        for &slot in slots {
            self.change.entry(slot).or_default().push(Entry {
                id,
                handler: Arc::clone(&handler),
            });
        }
        id
    }

    /// Registers a close handler for the given slots.
    pub fn register_close(&mut self, slots: &[usize], handler: CloseHandler) -> CallbackId {
        let id = self.allocate_id();
        for &slot in slots {
            self.close.entry(slot).or_default().push(Entry {
                id,
                handler: Arc::clone(&handler),
            });
        }
        id
    }

    /// Registers a change handler that cancels every change on the given
    /// slots. Useful for read-only display slots.
    pub fn register_auto_cancel(&mut self, slots: &[usize]) -> CallbackId {
        self.register_change(slots, Arc::new(|_| false))
    }

    /// Unregisters a previously registered callback.
    ///
    /// Returns true if the callback was found on any slot.
    pub fn unregister(&mut self, id: CallbackId) -> bool {
        let mut found = false;
        for entries in self.click.values_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            found |= entries.len() != before;
        }
        for entries in self.change.values_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            found |= entries.len() != before;
        }
        for entries in self.close.values_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            found |= entries.len() != before;
        }
        found
    }

    /// Unregisters every callback attached to the given slots.
    pub fn unregister_at(&mut self, slots: &[usize]) {
        for slot in slots {
            self.click.remove(slot);
            self.change.remove(slot);
            self.close.remove(slot);
        }
    }

    /// Removes all registered callbacks.
    pub fn clear(&mut self) {
        self.click.clear();
        self.change.clear();
        self.close.clear();
    }

    /// Returns true if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.click.values().all(Vec::is_empty)
            && self.change.values().all(Vec::is_empty)
            && self.close.values().all(Vec::is_empty)
    }

    /// Returns the click handlers registered for a slot.
    pub fn click_handlers(&self, slot: usize) -> impl Iterator<Item = &SlotClickHandler> {
        self.click
            .get(&slot)
            .into_iter()
            .flatten()
            .map(|entry| &entry.handler)
    }

    /// Returns the change handlers registered for a slot.
    pub fn change_handlers(&self, slot: usize) -> impl Iterator<Item = &SlotChangeHandler> {
        self.change
            .get(&slot)
            .into_iter()
            .flatten()
            .map(|entry| &entry.handler)
    }

    /// Returns the close handlers registered for a slot.
    pub fn close_handlers(&self, slot: usize) -> impl Iterator<Item = &CloseHandler> {
        self.close
            .get(&slot)
            .into_iter()
            .flatten()
            .map(|entry| &entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_invoke() {
        let mut callbacks = MenuCallbacks::new();
        callbacks.register_click(&[0, 3], Arc::new(|slot, _| slot != 3));

        let handler = callbacks.click_handlers(3).next().unwrap();
        assert!(!handler(3, ClickType::Pickup));
        let handler = callbacks.click_handlers(0).next().unwrap();
        assert!(handler(0, ClickType::Pickup));
        assert!(callbacks.click_handlers(1).next().is_none());
    }

    #[test]
    fn test_unregister() {
        let mut callbacks = MenuCallbacks::new();
        let id = callbacks.register_change(&[1, 2], Arc::new(|_| true));
        callbacks.register_change(&[2], Arc::new(|_| true));

        assert!(callbacks.unregister(id));
        assert!(!callbacks.unregister(id));
        assert!(callbacks.change_handlers(1).next().is_none());
        assert_eq!(callbacks.change_handlers(2).count(), 1);
    }

    #[test]
    fn test_unregister_at() {
        let mut callbacks = MenuCallbacks::new();
        callbacks.register_click(&[4], Arc::new(|_, _| true));
        callbacks.register_close(&[4], Arc::new(|| ()));

        callbacks.unregister_at(&[4]);
        assert!(callbacks.click_handlers(4).next().is_none());
        assert!(callbacks.close_handlers(4).next().is_none());
        assert!(callbacks.is_empty());
    }

    #[test]
    fn test_auto_cancel() {
        let mut callbacks = MenuCallbacks::new();
        callbacks.register_auto_cancel(&[7]);
        let handler = callbacks.change_handlers(7).next().unwrap();
        assert!(!handler(7));
    }

    #[test]
    fn test_clear() {
        let mut callbacks = MenuCallbacks::new();
        callbacks.register_click(&[0], Arc::new(|_, _| true));
        callbacks.clear();
        assert!(callbacks.is_empty());
    }
}
