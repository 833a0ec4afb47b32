//! Line-oriented scanning of deployment configuration text.
//!
//! Scanning happens in two layers:
//!
//! - [`line`] classifies one physical line at a time
//! - [`machine`] tracks the active section and open feature entry and
//!   assembles a [`ParsedConfig`]
//!
//! The scanner accepts YAML-ish and JSON-ish layouts alike and never
//! fails. Anything it does not understand is skipped.
//!
//! # Example
//!
//! ```
//! use deploylint::scan::scan;
//!
//! let config = scan("metadata:\n  name: api\n  env: prod\n");
//! assert_eq!(config.metadata_line, Some(1));
//! assert_eq!(config.metadata["env"].value, "prod");
//! assert_eq!(config.metadata["env"].line, 3);
//! ```

pub mod line;
pub mod machine;
pub mod model;

pub use line::{classify, Bracket, Line, LineKind};
pub use machine::{scan, SectionScanner};
pub use model::{FeatureEntry, FieldInfo, Fields, ParsedConfig, Section};
