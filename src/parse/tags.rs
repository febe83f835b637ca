//! Generic `tag=value` list parsing.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Tag/value pairs of a record, in first-seen order with unique tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    entries: Vec<(String, String)>,
}

impl ParsedFields {
    /// Value of `tag`, if present. Tags are case-sensitive.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == tag)
            .map(|(_, v)| v.as_str())
    }

    /// True when `tag` is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tag was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags and values in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-serializes as `k=v; k=v`.
    pub fn to_record_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    // First occurrence wins
    fn insert(&mut self, tag: &str, value: &str) {
        if !self.contains(tag) {
            self.entries.push((tag.to_string(), value.to_string()));
        }
    }
}

impl Serialize for ParsedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Parses a `;`-separated `tag=value` list.
///
/// Each segment is trimmed and split on its first `=`; tag and value are
/// trimmed again. Segments without `=`, or with an empty tag or value, are
/// dropped. Never fails.
///
/// # Examples
///
/// ```
/// use mailauth_check::parse::parse_tags;
///
/// let fields = parse_tags("v=DMARC1; p=quarantine; pct=50");
/// assert_eq!(fields.get("p"), Some("quarantine"));
/// assert_eq!(fields.get("pct"), Some("50"));
/// ```
pub fn parse_tags(record: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();
    for segment in record.split(';') {
        let Some((tag, value)) = segment.trim().split_once('=') else {
            continue;
        };
        let (tag, value) = (tag.trim(), value.trim());
        if tag.is_empty() || value.is_empty() {
            continue;
        }
        fields.insert(tag, value);
    }
    fields
}
