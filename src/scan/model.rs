//! Intermediate structure produced by the scanner.

use std::collections::HashMap;

/// One of the three recognized top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Metadata,
    Settings,
    Features,
}

impl Section {
    /// Map a key to the section it opens, if any.
    ///
    /// Matching is case-sensitive; callers pass keys that are already
    /// quote-stripped.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "metadata" => Some(Self::Metadata),
            "settings" => Some(Self::Settings),
            "features" => Some(Self::Features),
            _ => None,
        }
    }

    /// The key that opens this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Settings => "settings",
            Self::Features => "features",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value and the line where it was last assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Quote-stripped, trimmed value text.
    pub value: String,
    /// 1-indexed source line.
    pub line: usize,
}

impl FieldInfo {
    pub fn new(value: impl Into<String>, line: usize) -> Self {
        Self {
            value: value.into(),
            line,
        }
    }
}

/// Field name to value mapping for one section or feature entry.
pub type Fields = HashMap<String, FieldInfo>;

/// One element of the `features` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEntry {
    /// Fields assigned inside this entry.
    pub fields: Fields,
    /// Line where the entry began.
    pub line: usize,
}

impl FeatureEntry {
    /// Start an empty entry anchored at `line`.
    pub fn new(line: usize) -> Self {
        Self {
            fields: HashMap::new(),
            line,
        }
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&FieldInfo> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Everything the scanner extracted from one configuration text.
///
/// Built once per lint call and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub metadata: Fields,
    /// Line of the first `metadata` header, if one was seen.
    pub metadata_line: Option<usize>,
    pub settings: Fields,
    /// Line of the first `settings` header, if one was seen.
    pub settings_line: Option<usize>,
    pub features: Vec<FeatureEntry>,
    /// Line of the first `features` header, if one was seen.
    pub features_line: Option<usize>,
}

impl ParsedConfig {
    /// Line where `section` was first opened, if it ever was.
    pub fn section_line(&self, section: Section) -> Option<usize> {
        match section {
            Section::Metadata => self.metadata_line,
            Section::Settings => self.settings_line,
            Section::Features => self.features_line,
        }
    }

    /// Fallback line for section-level issues: the header line, or 1.
    pub fn anchor(&self, section: Section) -> usize {
        self.section_line(section).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_from_key_is_case_sensitive() {
        assert_eq!(Section::from_key("metadata"), Some(Section::Metadata));
        assert_eq!(Section::from_key("settings"), Some(Section::Settings));
        assert_eq!(Section::from_key("features"), Some(Section::Features));
        assert_eq!(Section::from_key("Metadata"), None);
        assert_eq!(Section::from_key("feature"), None);
    }

    #[test]
    fn section_display_matches_key() {
        assert_eq!(Section::Settings.to_string(), "settings");
    }

    #[test]
    fn anchor_falls_back_to_first_line() {
        let config = ParsedConfig {
            settings_line: Some(7),
            ..Default::default()
        };

        assert_eq!(config.anchor(Section::Settings), 7);
        assert_eq!(config.anchor(Section::Metadata), 1);
        assert_eq!(config.section_line(Section::Features), None);
    }

    #[test]
    fn feature_entry_starts_empty() {
        let mut entry = FeatureEntry::new(4);
        assert!(entry.is_empty());

        entry
            .fields
            .insert("name".to_string(), FieldInfo::new("search", 5));
        assert!(!entry.is_empty());
        assert_eq!(entry.get("name").map(|f| f.line), Some(5));
    }
}
