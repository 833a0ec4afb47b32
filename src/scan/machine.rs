//! Section state machine.
//!
//! [`SectionScanner`] consumes classified lines in order and assembles a
//! [`ParsedConfig`]. It has no indentation awareness: a key spelled
//! `metadata`, `settings` or `features` switches the active section
//! wherever it appears.

use super::line::{classify, classify_text, Bracket, LineKind};
use super::model::{FeatureEntry, FieldInfo, ParsedConfig, Section};

/// Line-by-line builder for [`ParsedConfig`].
#[derive(Debug, Default)]
pub struct SectionScanner {
    config: ParsedConfig,
    current: Option<Section>,
    pending: Option<FeatureEntry>,
    line_no: usize,
}

impl SectionScanner {
    /// Create a scanner positioned before the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// The section the next key-value line will be routed to.
    pub fn current_section(&self) -> Option<Section> {
        self.current
    }

    /// Consume the next physical line.
    pub fn feed(&mut self, raw: &str) {
        self.line_no += 1;
        let line = classify(raw);

        match (self.current, line.kind) {
            (_, LineKind::Blank) => {}
            (Some(Section::Features), LineKind::Bracket(Bracket::CloseBrace)) => {
                self.flush_pending();
            }
            (_, LineKind::Bracket(_)) => {}
            (Some(Section::Features), _) => self.feed_feature_line(line.text),
            (_, kind) => self.apply(kind),
        }
    }

    /// Flush any pending feature entry and return the assembled config.
    pub fn finish(mut self) -> ParsedConfig {
        self.flush_pending();
        self.config
    }

    /// Handle a non-bracket line while inside `features`, where `-` and
    /// `{` prefixes open a new entry.
    fn feed_feature_line(&mut self, text: &str) {
        let mut rest = text;

        if let Some(after) = rest.strip_prefix('-') {
            self.start_entry();
            rest = after.trim();
            if rest.is_empty() {
                return;
            }
        }

        if let Some(after) = rest.strip_prefix('{') {
            self.start_entry();
            rest = after.trim();
            if rest.is_empty() {
                return;
            }
        }

        if rest == "}" {
            // The entry was opened on this very line, so it has no fields.
            if let Some(entry) = self.pending.take() {
                self.config.features.push(entry);
            }
            return;
        }

        self.apply(classify_text(rest));
    }

    fn apply(&mut self, kind: LineKind<'_>) {
        let LineKind::KeyValue { key, value } = kind else {
            return;
        };

        if let Some(section) = Section::from_key(key) {
            self.enter(section);
            return;
        }

        let Some(value) = value else {
            return;
        };
        let field = FieldInfo::new(value, self.line_no);

        match self.current {
            Some(Section::Metadata) => {
                self.config.metadata.insert(key.to_string(), field);
            }
            Some(Section::Settings) => {
                self.config.settings.insert(key.to_string(), field);
            }
            Some(Section::Features) => {
                let line_no = self.line_no;
                self.pending
                    .get_or_insert_with(|| FeatureEntry::new(line_no))
                    .fields
                    .insert(key.to_string(), field);
            }
            None => {}
        }
    }

    fn enter(&mut self, section: Section) {
        tracing::trace!(line = self.line_no, %section, "entering section");
        self.current = Some(section);

        let anchor = match section {
            Section::Metadata => &mut self.config.metadata_line,
            Section::Settings => &mut self.config.settings_line,
            Section::Features => &mut self.config.features_line,
        };
        anchor.get_or_insert(self.line_no);
    }

    fn start_entry(&mut self) {
        self.flush_pending();
        self.pending = Some(FeatureEntry::new(self.line_no));
    }

    /// Move the pending entry into `features` if it has any fields.
    ///
    /// An empty pending entry is left in place.
    fn flush_pending(&mut self) {
        if self.pending.as_ref().is_some_and(|entry| !entry.is_empty()) {
            if let Some(entry) = self.pending.take() {
                self.config.features.push(entry);
            }
        }
    }
}

/// Scan a whole configuration text.
pub fn scan(text: &str) -> ParsedConfig {
    let mut scanner = SectionScanner::new();
    for raw in text.lines() {
        scanner.feed(raw);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::model::Fields;

    fn value<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
        fields.get(key).map(|f| f.value.as_str())
    }

    #[test]
    fn nested_yaml_layout() {
        let config = scan(
            "metadata:\n  name: awesome\n  env: prod\nsettings:\n  replicas: 2\n  timeout: 60\nfeatures:\n  - name: featureA\n    enabled: true\n",
        );

        assert_eq!(config.metadata_line, Some(1));
        assert_eq!(config.settings_line, Some(4));
        assert_eq!(config.features_line, Some(7));
        assert_eq!(value(&config.metadata, "name"), Some("awesome"));
        assert_eq!(value(&config.settings, "timeout"), Some("60"));
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].line, 8);
        assert_eq!(value(&config.features[0].fields, "enabled"), Some("true"));
    }

    #[test]
    fn json_layout() {
        let text = r#"{
  "metadata": {
    "name": "awesome",
    "env": "prod"
  },
  "settings": {
    "replicas": 2,
    "timeout": 60
  },
  "features": [
    {
      "name": "featureA",
      "enabled": true
    },
    {
      "name": "featureB",
      "enabled": false
    }
  ]
}"#;
        let config = scan(text);

        assert_eq!(value(&config.metadata, "env"), Some("prod"));
        assert_eq!(value(&config.settings, "replicas"), Some("2"));
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.features[0].line, 12);
        assert_eq!(value(&config.features[1].fields, "name"), Some("featureB"));
    }

    #[test]
    fn field_lines_are_recorded() {
        let config = scan("# header\n\nsettings:\n  replicas: 3\n");
        assert_eq!(config.settings["replicas"].line, 4);
    }

    #[test]
    fn crlf_line_endings() {
        let config = scan("metadata:\r\n  name: api\r\n");
        assert_eq!(value(&config.metadata, "name"), Some("api"));
    }

    #[test]
    fn last_write_wins() {
        let config = scan("settings:\n  replicas: 1\n  replicas: 4\n");
        assert_eq!(config.settings["replicas"], FieldInfo::new("4", 3));
    }

    #[test]
    fn first_header_line_is_kept() {
        let config = scan("metadata:\n  name: a\nsettings:\n  replicas: 1\nmetadata:\n  env: dev\n");
        assert_eq!(config.metadata_line, Some(1));
        assert_eq!(value(&config.metadata, "env"), Some("dev"));
    }

    #[test]
    fn header_value_is_discarded() {
        let config = scan("metadata: {name: awesome, env: prod}\n");
        assert_eq!(config.metadata_line, Some(1));
        assert!(config.metadata.is_empty());
    }

    #[test]
    fn pairs_before_any_section_are_dropped() {
        let config = scan("name: orphan\nmetadata:\n  name: kept\n");
        assert_eq!(config.metadata.len(), 1);
        assert_eq!(value(&config.metadata, "name"), Some("kept"));
    }

    #[test]
    fn nested_structure_start_adds_no_field() {
        let config = scan("settings:\n  limits: {\n  replicas: 2\n");
        assert!(!config.settings.contains_key("limits"));
        assert_eq!(config.settings.len(), 1);
    }

    #[test]
    fn empty_value_is_stored() {
        let config = scan("metadata:\n  name:\n");
        assert_eq!(config.metadata["name"], FieldInfo::new("", 2));
    }

    #[test]
    fn marker_opens_new_entry_each_time() {
        let config = scan("features:\n  - name: a\n    enabled: true\n  - name: b\n");
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.features[0].line, 2);
        assert_eq!(config.features[1].line, 4);
        assert!(config.features[1].get("enabled").is_none());
    }

    #[test]
    fn bare_marker_anchors_following_fields() {
        let config = scan("features:\n  -\n    name: a\n");
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].line, 2);
    }

    #[test]
    fn bare_marker_without_fields_is_not_materialized() {
        let config = scan("features:\n  -\n  -\n");
        assert!(config.features.is_empty());
    }

    #[test]
    fn fields_without_marker_start_an_entry() {
        let config = scan("features:\n  name: a\n  enabled: true\n");
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].line, 2);
    }

    #[test]
    fn brace_closed_on_its_own_line_flushes() {
        let config = scan("features:\n  {\n    name: a\n  }\n  enabled: true\n");
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.features[0].line, 3);
        assert_eq!(config.features[1].line, 5);
    }

    #[test]
    fn inline_empty_mapping_is_materialized() {
        let config = scan("features:\n  - {}\n");
        assert_eq!(config.features.len(), 1);
        assert!(config.features[0].is_empty());
        assert_eq!(config.features[0].line, 2);
    }

    #[test]
    fn dash_brace_opens_one_entry() {
        let config = scan("features:\n  - {\n    name: a\n  }\n");
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].line, 2);
    }

    #[test]
    fn section_keyword_inside_features_switches_section() {
        let config = scan("features:\n  - name: a\n    metadata: x\n    enabled: true\n");
        assert_eq!(config.metadata_line, Some(3));
        assert_eq!(value(&config.metadata, "enabled"), Some("true"));
        assert_eq!(config.features.len(), 1);
        assert!(config.features[0].get("enabled").is_none());
    }

    #[test]
    fn dash_outside_features_is_an_ordinary_key() {
        let config = scan("metadata:\n  - name: x\n");
        assert_eq!(value(&config.metadata, "- name"), Some("x"));
    }

    #[test]
    fn current_section_tracks_headers() {
        let mut scanner = SectionScanner::new();
        assert_eq!(scanner.current_section(), None);
        scanner.feed("settings:");
        assert_eq!(scanner.current_section(), Some(Section::Settings));
        scanner.feed("  replicas: 1");
        scanner.feed("features: [");
        assert_eq!(scanner.current_section(), Some(Section::Features));
    }

    #[test]
    fn empty_input() {
        assert_eq!(scan(""), ParsedConfig::default());
    }
}
