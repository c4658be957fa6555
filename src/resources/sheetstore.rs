//! Sheet registry.
//!
//! Decoded sheets are immutable and shared by every sprite stack that plays
//! them. Entities refer to a sheet by key; the store hands out `Arc`s so
//! callers can keep a sheet alive outside the ECS world too.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;

use crate::sheet::Sheet;

/// Sheets keyed by string ID. `R` is the slice region type, e.g. a GPU
/// texture for rendering or `()` for layout-only sheets.
#[derive(Resource)]
pub struct SheetStore<R: Send + Sync + 'static> {
    sheets: FxHashMap<String, Arc<Sheet<R>>>,
}

impl<R: Send + Sync + 'static> Default for SheetStore<R> {
    fn default() -> Self {
        Self {
            sheets: FxHashMap::default(),
        }
    }
}

impl<R: Send + Sync + 'static> SheetStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `sheet` under `key`, replacing any previous sheet with that key.
    pub fn insert(&mut self, key: impl Into<String>, sheet: Sheet<R>) -> Arc<Sheet<R>> {
        let key = key.into();
        let sheet = Arc::new(sheet);
        if self.sheets.insert(key.clone(), Arc::clone(&sheet)).is_some() {
            warn!("replaced sheet {key:?} in store");
        }
        sheet
    }

    pub fn get(&self, key: &str) -> Option<&Arc<Sheet<R>>> {
        self.sheets.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sheets.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Arc<Sheet<R>>> {
        self.sheets.remove(key)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Stack;

    #[test]
    fn insert_and_lookup_share_the_same_sheet() {
        let mut store = SheetStore::<()>::new();
        let sheet = store.insert("knight", Sheet::new(8, 8, vec![Stack::new("top", 0, vec![])]));
        let stored = store.get("knight").unwrap();
        assert!(Arc::ptr_eq(&sheet, stored));
        assert!(store.contains("knight"));
        assert!(!store.contains("archer"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut store = SheetStore::<()>::new();
        store.insert("knight", Sheet::new(8, 8, vec![]));
        store.insert("knight", Sheet::new(16, 16, vec![]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("knight").unwrap().frame_width, 16);
        assert!(store.remove("knight").is_some());
        assert!(store.is_empty());
    }
}
