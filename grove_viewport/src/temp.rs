// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A per-sheet store of transient values with change listeners.

use grove_layout::SheetId;
use hashbrown::HashMap;

use crate::{TempKey, TempValueListener};

/// Transient per-sheet values, for hosts to embed behind
/// [`Host`](crate::Host)'s temp-value methods.
///
/// ```rust
/// use grove_layout::SheetId;
/// use grove_viewport::{TempKey, TempValueListener, TempValueStore};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let sheet = SheetId::from("s1");
/// let seen = Rc::new(Cell::new(0.0));
/// let sink = seen.clone();
///
/// let mut store = TempValueStore::new();
/// store.add_listener(&sheet, TempKey::ZoomFactor, TempValueListener::new(move |v| sink.set(v)));
/// store.set(&sheet, TempKey::ZoomFactor, 1.5);
///
/// assert_eq!(store.get(&sheet, TempKey::ZoomFactor), Some(1.5));
/// assert_eq!(seen.get(), 1.5);
/// ```
#[derive(Debug, Default)]
pub struct TempValueStore {
    values: HashMap<(SheetId, TempKey), f64>,
    listeners: HashMap<(SheetId, TempKey), Vec<TempValueListener>>,
}

impl TempValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a value.
    #[must_use]
    pub fn get(&self, sheet: &SheetId, key: TempKey) -> Option<f64> {
        self.values.get(&(sheet.clone(), key)).copied()
    }

    /// Stores a value and notifies the listeners registered for it, in
    /// registration order.
    pub fn set(&mut self, sheet: &SheetId, key: TempKey, value: f64) {
        let slot = (sheet.clone(), key);
        self.values.insert(slot.clone(), value);
        if let Some(listeners) = self.listeners.get(&slot) {
            for listener in listeners {
                listener.notify(value);
            }
        }
    }

    /// Registers a change listener.
    pub fn add_listener(&mut self, sheet: &SheetId, key: TempKey, listener: TempValueListener) {
        self.listeners
            .entry((sheet.clone(), key))
            .or_default()
            .push(listener);
    }

    /// Unregisters a change listener. Returns whether it was registered.
    pub fn remove_listener(
        &mut self,
        sheet: &SheetId,
        key: TempKey,
        listener: &TempValueListener,
    ) -> bool {
        let slot = (sheet.clone(), key);
        let Some(listeners) = self.listeners.get_mut(&slot) else {
            return false;
        };
        let Some(index) = listeners.iter().position(|l| l.same(listener)) else {
            return false;
        };
        listeners.remove(index);
        if listeners.is_empty() {
            self.listeners.remove(&slot);
        }
        true
    }

    /// Number of listeners registered for a value.
    #[must_use]
    pub fn listener_count(&self, sheet: &SheetId, key: TempKey) -> usize {
        self.listeners
            .get(&(sheet.clone(), key))
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_are_scoped_to_their_sheet() {
        let s1 = SheetId::from("s1");
        let s2 = SheetId::from("s2");
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();

        let mut store = TempValueStore::new();
        store.add_listener(
            &s1,
            TempKey::ZoomFactor,
            TempValueListener::new(move |v| sink.borrow_mut().push(v)),
        );
        store.set(&s2, TempKey::ZoomFactor, 2.0);
        store.set(&s1, TempKey::ZoomFactor, 1.2);

        assert_eq!(*log.borrow(), [1.2]);
        assert_eq!(store.get(&s2, TempKey::ZoomFactor), Some(2.0));
    }

    #[test]
    fn removed_listener_is_not_notified() {
        let sheet = SheetId::from("s1");
        let hits = Rc::new(RefCell::new(0_u32));
        let sink = hits.clone();
        let listener = TempValueListener::new(move |_| *sink.borrow_mut() += 1);

        let mut store = TempValueStore::new();
        store.add_listener(&sheet, TempKey::ZoomFactor, listener.clone());
        assert_eq!(store.listener_count(&sheet, TempKey::ZoomFactor), 1);
        assert!(store.remove_listener(&sheet, TempKey::ZoomFactor, &listener));
        assert!(!store.remove_listener(&sheet, TempKey::ZoomFactor, &listener));
        store.set(&sheet, TempKey::ZoomFactor, 3.0);

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(store.listener_count(&sheet, TempKey::ZoomFactor), 0);
    }
}
