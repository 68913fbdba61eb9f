// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zone file serialization and deserialization.
//!
//! A zone file is a single object mapping each zone name to
//! `[x1, y1, x2, y2]`. JSON is the default; paths ending in `.yaml` or
//! `.yml` use YAML with the same layout.

use crate::models::store::ZoneMap;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// On-disk format of a zone file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Read all zones from `path`.
pub fn read_zones(path: &Path) -> Result<ZoneMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let zones: ZoneMap = match Format::from_path(path) {
        Format::Json => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?,
        Format::Yaml => serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?,
    };
    Ok(zones)
}

/// Write all zones to `path`, replacing its contents.
pub fn write_zones(zones: &ZoneMap, path: &Path) -> Result<()> {
    let text = match Format::from_path(path) {
        Format::Json => to_json_pretty(zones)?,
        Format::Yaml => serde_yaml::to_string(zones)?,
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Pretty JSON with 4-space indentation.
fn to_json_pretty(zones: &ZoneMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    zones.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::{Point, Rect};

    fn sample() -> ZoneMap {
        let mut zones = ZoneMap::new();
        zones.insert(
            "doorway".to_string(),
            Rect::from_corners(Point::new(10, 10), Point::new(100, 50)),
        );
        zones.insert(
            "shelf".to_string(),
            Rect::from_corners(Point::new(300, 20), Point::new(220, 180)),
        );
        zones
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("zones.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("zones.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("zones.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("zones")), Format::Json);
    }

    #[test]
    fn test_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        write_zones(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"doorway\": [\n        10,"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["doorway"], serde_json::json!([10, 10, 100, 50]));
        assert_eq!(value["shelf"], serde_json::json!([220, 20, 300, 180]));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.yaml");
        write_zones(&sample(), &path).unwrap();

        assert_eq!(read_zones(&path).unwrap(), sample());
    }

    #[test]
    fn test_reads_file_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        std::fs::write(&path, r#"{"entrance": [5, 6, 7, 8], "exit": [40, 30, 20, 10]}"#).unwrap();

        let zones = read_zones(&path).unwrap();
        assert_eq!(zones["entrance"].to_array(), [5, 6, 7, 8]);
        assert_eq!(zones["exit"].to_array(), [20, 10, 40, 30]);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        std::fs::write(&path, r#"{"entrance": [5, 6, 7]}"#).unwrap();

        assert!(read_zones(&path).is_err());
    }
}
