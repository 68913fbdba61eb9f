// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File-backed zone store.
//!
//! The store keeps every zone in memory and only touches its backing file
//! on [`ZoneStore::load`] and [`ZoneStore::save`]. Mutations made between
//! saves are lost if the program exits.

use super::zone::Rect;
use crate::io::serialization;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Zone name to rectangle, ordered by name.
pub type ZoneMap = BTreeMap<String, Rect>;

/// In-memory zones plus the file they are saved to.
#[derive(Debug, Clone)]
pub struct ZoneStore {
    path: PathBuf,
    zones: ZoneMap,
}

impl ZoneStore {
    /// Create an empty store backed by `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            zones: ZoneMap::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing or unreadable file is not an error: the store simply
    /// starts empty and the next save creates the file.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match serialization::read_zones(&path) {
            Ok(zones) => {
                log::info!("Loaded {} zones from {}", zones.len(), path.display());
                Self { path, zones }
            }
            Err(e) => {
                log::warn!("No existing zones in {} ({:#})", path.display(), e);
                Self::new(path)
            }
        }
    }

    /// Write every zone to the backing file, returning how many were saved.
    pub fn save(&self) -> Result<usize> {
        serialization::write_zones(&self.zones, &self.path)?;
        log::info!("Saved {} zones to {}", self.zones.len(), self.path.display());
        Ok(self.zones.len())
    }

    /// Insert or overwrite a zone, returning the rectangle it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rect: Rect) -> Option<Rect> {
        self.zones.insert(name.into(), rect)
    }

    pub fn remove(&mut self, name: &str) -> Option<Rect> {
        self.zones.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::Point;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect::from_corners(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_insert_overwrites_existing_name() {
        let mut store = ZoneStore::new("zones.json");
        assert_eq!(store.insert("door", rect(0, 0, 10, 10)), None);
        let previous = store.insert("door", rect(5, 5, 20, 20));

        assert_eq!(previous, Some(rect(0, 0, 10, 10)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.zones().get("door"), Some(&rect(5, 5, 20, 20)));
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut store = ZoneStore::new("zones.json");
        store.insert("door", rect(0, 0, 10, 10));
        let before = store.zones().clone();

        assert_eq!(store.remove("window"), None);
        assert_eq!(store.zones(), &before);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ZoneStore::load(dir.path().join("missing.json"));
        assert!(store.is_empty());
        assert_eq!(store.path(), dir.path().join("missing.json"));
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(ZoneStore::load(&path).is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");

        let mut store = ZoneStore::new(&path);
        store.insert("doorway", rect(10, 10, 100, 50));
        store.insert("counter", rect(200, 120, 340, 400));
        store.insert("dot", rect(7, 7, 7, 7));
        assert_eq!(store.save().unwrap(), 3);

        let loaded = ZoneStore::load(&path);
        assert_eq!(loaded.zones(), store.zones());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ZoneStore::new(dir.path().join("nope").join("zones.json"));
        assert!(store.save().is_err());
    }
}
