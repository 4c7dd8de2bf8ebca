//! Vine layout resource loaded from a JSON data file.
//!
//! The layout file is a list of records, one per chain:
//!
//! ```json
//! [
//!   { "length": 3, "rel_anchor": [0.2, 0.1] },
//!   { "length": 5, "rel_anchor": [0.8, 0.1] }
//! ]
//! ```
//!
//! `rel_anchor` is a fraction of the screen size (y-down). The layout is read
//! once during setup and is immutable afterwards. A missing or corrupt file
//! degrades to an empty layout (zero vines); this is a demonstration artifact,
//! not production infrastructure.

use bevy_ecs::prelude::Resource;
use log::warn;
use serde::Deserialize;
use std::path::Path;

/// One chain: segment count plus anchor point relative to screen size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VineSpec {
    pub length: u32,
    pub rel_anchor: [f32; 2],
}

#[derive(Resource, Debug, Clone, Default)]
pub struct VineLayout {
    pub vines: Vec<VineSpec>,
}

impl VineLayout {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let vines = serde_json::from_str(data)?;
        Ok(VineLayout { vines })
    }

    /// Load the layout file, degrading to zero vines on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Vine layout {:?} unreadable ({}); no vines this game", path, e);
                return Self::default();
            }
        };
        match Self::from_json(&data) {
            Ok(layout) => layout,
            Err(e) => {
                warn!("Vine layout {:?} corrupt ({}); no vines this game", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let layout = VineLayout::from_json(
            r#"[
                { "length": 3, "rel_anchor": [0.2, 0.1] },
                { "length": 5, "rel_anchor": [0.8, 0.1] }
            ]"#,
        )
        .expect("valid layout");
        assert_eq!(layout.vines.len(), 2);
        assert_eq!(layout.vines[0].length, 3);
        assert_eq!(layout.vines[0].rel_anchor, [0.2, 0.1]);
        assert_eq!(layout.vines[1].length, 5);
    }

    #[test]
    fn test_corrupt_layout_is_an_error() {
        assert!(VineLayout::from_json("{ not json").is_err());
        assert!(VineLayout::from_json(r#"[{ "length": "three" }]"#).is_err());
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let layout = VineLayout::load_or_empty(Path::new("./no/such/vines.json"));
        assert!(layout.vines.is_empty());
    }
}
