//! Check evaluation: which selectors are present in a document.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::checks::CheckSpec;
use crate::document::SelectorQuery;
use crate::error::Result;

/// Presence of each checked selector, iterated in insertion order.
///
/// Re-inserting a selector updates its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMap {
    entries: Vec<(String, bool)>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: &str, present: bool) {
        match self.entries.iter_mut().find(|(key, _)| key == selector) {
            Some(entry) => entry.1 = present,
            None => self.entries.push((selector.to_string(), present)),
        }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, present)| *present)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|(_, present)| *present).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ResultMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, present) in &self.entries {
            map.serialize_entry(selector, present)?;
        }
        map.end()
    }
}

/// Test every check against `document`.
///
/// Checks are visited in lexicographic order; a selector is present when it
/// matches at least one element. An invalid selector aborts the run.
pub fn evaluate<D: SelectorQuery + ?Sized>(document: &D, checks: &CheckSpec) -> Result<ResultMap> {
    let mut out = ResultMap::new();
    for selector in checks.sorted() {
        let present = document.count_matches(selector)? > 0;
        out.insert(selector, present);
    }
    Ok(out)
}
