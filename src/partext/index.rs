use std::collections::BTreeMap;

use regex::{Captures, Regex};

/// Values keyed by the byte offset of the marker they came from, plus a
/// fallback that also sits at offset 0.
#[derive(Debug, Clone)]
pub struct PositionIndex<V> {
    entries: BTreeMap<usize, V>,
    fallback: V,
}

impl<V: Clone> PositionIndex<V> {
    pub fn new(fallback: V) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, fallback.clone());
        PositionIndex { entries, fallback }
    }

    /// One scan over `text`. Each match is keyed by its start offset; a
    /// later match at the same offset (including 0) replaces the earlier one.
    pub fn build<F>(text: &str, marker: &Regex, fallback: V, mut extract: F) -> Self
    where
        F: FnMut(&Captures<'_>) -> V,
    {
        let mut index = PositionIndex::new(fallback);
        for caps in marker.captures_iter(text) {
            let start = caps.get(0).map_or(0, |m| m.start());
            index.insert(start, extract(&caps));
        }
        index
    }

    pub fn insert(&mut self, offset: usize, value: V) {
        self.entries.insert(offset, value);
    }

    /// Entry with the largest key strictly below `offset`.
    pub fn floor(&self, offset: usize) -> Option<&V> {
        self.entries.range(..offset).next_back().map(|(_, v)| v)
    }

    pub fn resolve(&self, offset: usize) -> &V {
        self.floor(offset).unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PositionIndex<&'static str> {
        let mut idx = PositionIndex::new("@0");
        idx.insert(50, "@50");
        idx.insert(120, "@120");
        idx
    }

    #[test]
    fn floor_is_strict() {
        let idx = sample();
        assert_eq!(idx.floor(10), Some(&"@0"));
        assert_eq!(idx.floor(50), Some(&"@0"));
        assert_eq!(idx.floor(51), Some(&"@50"));
        assert_eq!(idx.floor(121), Some(&"@120"));
        assert_eq!(idx.floor(0), None);
    }

    #[test]
    fn resolve_falls_back() {
        let idx = sample();
        assert_eq!(idx.resolve(0), &"@0");
        assert_eq!(idx.resolve(500), &"@120");
    }

    #[test]
    fn last_writer_wins() {
        let mut idx = sample();
        idx.insert(50, "again");
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.floor(51), Some(&"again"));
    }

    #[test]
    fn build_keys_by_match_start() {
        let re = Regex::new(r"<N (\d+)>").unwrap();
        let text = "ab<N 1>cdef<N 22>";
        let idx = PositionIndex::build(text, &re, String::from("none"), |c| c[1].to_string());
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.resolve(2), "none");
        assert_eq!(idx.resolve(3), "1");
        assert_eq!(idx.resolve(11), "1");
        assert_eq!(idx.resolve(12), "22");
    }

    #[test]
    fn marker_at_zero_replaces_fallback_entry() {
        let re = Regex::new(r"<N (\d+)>").unwrap();
        let idx = PositionIndex::build("<N 7> text", &re, String::from("none"), |c| c[1].to_string());
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.resolve(1), "7");
        assert_eq!(idx.resolve(0), "none");
    }
}
