//! Per-document deduplication of graphics-state dictionaries.

use crate::error::DrawingError;
use std::collections::HashMap;
use vellum_types::StyleName;

/// Maps each distinct graphics-state dictionary to a stable resource name.
///
/// Names are handed out in first-seen order as `GS0`, `GS1`, ... and never
/// change for the lifetime of the registry, so one registry should live as long
/// as the document whose page resources declare them.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: Vec<(StyleName, String)>,
    by_dict: HashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name for `dict`, registering it first if it is new.
    pub fn intern(&mut self, dict: &str) -> StyleName {
        if let Some(&index) = self.by_dict.get(dict) {
            return self.entries[index].0.clone();
        }
        let index = self.entries.len();
        let name = StyleName::numbered(index);
        log::debug!("Registered graphics state {name}: {dict}");
        self.entries.push((name.clone(), dict.to_string()));
        self.by_dict.insert(dict.to_string(), index);
        name
    }

    /// The dictionary registered under `name`.
    pub fn lookup_by_name(&self, name: &str) -> Result<&str, DrawingError> {
        self.entries
            .iter()
            .find(|(registered, _)| registered.as_str() == name)
            .map(|(_, dict)| dict.as_str())
            .ok_or_else(|| DrawingError::StyleNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered entries in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleName, &str)> {
        self.entries.iter().map(|(name, dict)| (name, dict.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_dicts_share_a_name() {
        let mut registry = StyleRegistry::new();
        let a = registry.intern("<< /Type /ExtGState\n/ca 0.5 >>");
        let b = registry.intern("<< /Type /ExtGState\n/LW 2 >>");
        let again = registry.intern("<< /Type /ExtGState\n/ca 0.5 >>");
        assert_eq!(a.as_str(), "GS0");
        assert_eq!(b.as_str(), "GS1");
        assert_eq!(again, a);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_returns_the_registered_dict() {
        let mut registry = StyleRegistry::new();
        registry.intern("<< /Type /ExtGState\n/LW 2 >>");
        assert_eq!(registry.lookup_by_name("GS0").unwrap(), "<< /Type /ExtGState\n/LW 2 >>");
        assert!(matches!(
            registry.lookup_by_name("GS7"),
            Err(DrawingError::StyleNotFound(name)) if name == "GS7"
        ));
    }

    #[test]
    fn iterates_in_first_seen_order() {
        let mut registry = StyleRegistry::new();
        assert!(registry.is_empty());
        registry.intern("b");
        registry.intern("a");
        registry.intern("b");
        let names: Vec<&str> = registry.iter().map(|(name, _)| name.as_str()).collect();
        let dicts: Vec<&str> = registry.iter().map(|(_, dict)| dict).collect();
        assert_eq!(names, ["GS0", "GS1"]);
        assert_eq!(dicts, ["b", "a"]);
    }
}
