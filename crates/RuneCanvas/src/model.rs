//! # Core Data Models
//!
//! This module defines the rune tree (paths, slots, options) and the image table
//! that the painter reads from.
//!
//! Both are built once during the load phase and are read-only afterwards. The
//! image table is generic over `H`, the host's decoded image handle, so the
//! library never depends on a particular graphics backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use url::Url;

use crate::error::CanvasError;

/// One selectable rune within a slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuneOption {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub key: String,
    /// Display name.
    pub name: String,
    /// Image path relative to the icon base URL.
    pub icon: String,
    #[serde(default, rename = "shortDesc")]
    pub short_desc: String,
    #[serde(default, rename = "longDesc")]
    pub long_desc: String,
}

/// A row of mutually exclusive runes. Slot 0 of a path holds the keystones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuneSlot {
    #[serde(default)]
    pub runes: Vec<RuneOption>,
}

/// A top-level rune category (Precision, Domination, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunePath {
    #[serde(default)]
    pub id: u32,
    /// String identifier, e.g. `"Precision"`.
    pub key: String,
    /// Display label.
    pub name: String,
    /// Image path relative to the icon base URL.
    pub icon: String,
    #[serde(default)]
    pub slots: Vec<RuneSlot>,
}

impl RunePath {
    /// The keystone slot, if the path has any slots at all.
    pub fn keystones(&self) -> Option<&RuneSlot> {
        self.slots.first()
    }

    /// Total number of options across every slot.
    pub fn option_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.runes.len()).sum()
    }
}

/// Address of an icon inside the rune tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKey {
    /// The icon of the path at this index.
    Path(usize),
    /// The icon of option `option` in slot `slot` of path `path`.
    Rune {
        path: usize,
        slot: usize,
        option: usize,
    },
}

impl ImageKey {
    pub fn path(path: usize) -> Self {
        Self::Path(path)
    }

    pub fn rune(path: usize, slot: usize, option: usize) -> Self {
        Self::Rune { path, slot, option }
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKey::Path(path) => write!(f, "path[{path}]"),
            ImageKey::Rune { path, slot, option } => {
                write!(f, "path[{path}].slot[{slot}].rune[{option}]")
            }
        }
    }
}

/// The full, ordered collection of rune paths.
///
/// Slot labels (the joined option names used by the text listing) are derived
/// once at construction since the tree never changes after load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuneTree {
    paths: Vec<RunePath>,
    slot_labels: Vec<Vec<String>>,
}

impl RuneTree {
    pub fn new(paths: Vec<RunePath>) -> Self {
        let slot_labels = paths
            .iter()
            .map(|path| path.slots.iter().map(join_option_names).collect())
            .collect();

        Self { paths, slot_labels }
    }

    /// Parses rune data.
    ///
    /// Accepts either a JSON array of paths (the ddragon `runesReforged.json`
    /// layout) or an object whose values are paths. Object order is kept.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let value: Value = serde_json::from_str(json)?;
        let paths: Vec<RunePath> = match value {
            Value::Array(_) => serde_json::from_value(value)?,
            Value::Object(map) => map
                .into_iter()
                .map(|(_, path)| serde_json::from_value(path))
                .collect::<Result<_, _>>()?,
            other => {
                return Err(CanvasError::UnexpectedShape {
                    found: json_kind(&other),
                });
            }
        };

        tracing::debug!(paths = paths.len(), "Parsed rune tree");
        Ok(Self::new(paths))
    }

    pub fn paths(&self) -> &[RunePath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Option names of one slot, each prefixed by a space and joined by commas
    /// (`" Press the Attack, Lethal Tempo"`).
    pub fn slot_label(&self, path: usize, slot: usize) -> Option<&str> {
        self.slot_labels.get(path)?.get(slot).map(String::as_str)
    }

    /// Shorthand for the label of slot 0.
    pub fn keystone_label(&self, path: usize) -> Option<&str> {
        self.slot_label(path, 0)
    }

    /// Every icon reference in the tree, in render order.
    pub fn icon_refs(&self) -> Vec<(ImageKey, &str)> {
        let mut refs = Vec::new();
        for (p, path) in self.paths.iter().enumerate() {
            refs.push((ImageKey::path(p), path.icon.as_str()));
            for (s, slot) in path.slots.iter().enumerate() {
                for (o, rune) in slot.runes.iter().enumerate() {
                    refs.push((ImageKey::rune(p, s, o), rune.icon.as_str()));
                }
            }
        }
        refs
    }

    /// Resolves every icon reference against `base`.
    pub fn icon_urls(&self, base: &Url) -> Result<Vec<(ImageKey, Url)>, CanvasError> {
        self.icon_refs()
            .into_iter()
            .map(|(key, icon)| {
                base.join(icon)
                    .map(|url| (key, url))
                    .map_err(|source| CanvasError::InvalidIconUrl {
                        icon: icon.to_string(),
                        source,
                    })
            })
            .collect()
    }

    /// Looks up the icon path behind a key.
    pub fn icon(&self, key: ImageKey) -> Option<&str> {
        match key {
            ImageKey::Path(p) => self.paths.get(p).map(|path| path.icon.as_str()),
            ImageKey::Rune { path, slot, option } => self
                .paths
                .get(path)?
                .slots
                .get(slot)?
                .runes
                .get(option)
                .map(|rune| rune.icon.as_str()),
        }
    }
}

fn join_option_names(slot: &RuneSlot) -> String {
    slot.runes
        .iter()
        .map(|rune| format!(" {}", rune.name))
        .collect::<Vec<_>>()
        .join(",")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loaded images keyed by their position in the rune tree.
///
/// The table starts out writable. Once every icon in the tree has an entry,
/// `mark_ready` seals it and raises the readiness flag the painter checks.
#[derive(Clone, Debug)]
pub struct ImageTable<H> {
    images: HashMap<ImageKey, H>,
    ready: bool,
}

impl<H> Default for ImageTable<H> {
    fn default() -> Self {
        Self {
            images: HashMap::new(),
            ready: false,
        }
    }
}

impl<H> ImageTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a decoded image. Fails once the table has been sealed.
    pub fn insert(&mut self, key: ImageKey, handle: H) -> Result<(), CanvasError> {
        if self.ready {
            return Err(CanvasError::TableSealed(key));
        }
        self.images.insert(key, handle);
        Ok(())
    }

    pub fn get(&self, key: ImageKey) -> Option<&H> {
        self.images.get(&key)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Icons of `runes` that have no entry yet.
    pub fn missing<'a>(&self, runes: &'a RuneTree) -> Vec<(ImageKey, &'a str)> {
        runes
            .icon_refs()
            .into_iter()
            .filter(|(key, _)| !self.images.contains_key(key))
            .collect()
    }

    /// Raises the readiness flag if every icon of `runes` is loaded.
    ///
    /// The flag is left untouched on error, so the painter keeps treating the
    /// scene as not ready.
    pub fn mark_ready(&mut self, runes: &RuneTree) -> Result<(), CanvasError> {
        if let Some((key, icon)) = self.missing(runes).into_iter().next() {
            return Err(CanvasError::MissingImage {
                key,
                icon: icon.to_string(),
            });
        }
        self.ready = true;
        tracing::info!(images = self.images.len(), "Image table ready");
        Ok(())
    }
}

/// Everything the painter needs for a frame, produced once by the load phase.
#[derive(Clone, Debug)]
pub struct SceneData<H> {
    pub runes: RuneTree,
    pub images: ImageTable<H>,
}

impl<H> SceneData<H> {
    /// A scene whose images are still to be loaded.
    pub fn new(runes: RuneTree) -> Self {
        Self {
            runes,
            images: ImageTable::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.images.is_ready()
    }
}
