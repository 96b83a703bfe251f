//! Extraction engine.
//!
//! - `scan`: source file discovery and extension filtering
//! - `matcher`: the two tag comment grammars
//! - `gutter`: multiline comment flattening
//! - `collision`: duplicate name detection
//! - `xml`: output document tree and serializer
//! - `pipeline`: the full run tying these together

pub mod collision;
pub mod gutter;
pub mod matcher;
pub mod pipeline;
pub mod record;
pub mod scan;
pub mod xml;

pub use collision::{NameCollision, find_collision};
pub use gutter::{DEFAULT_SEPARATOR, strip_gutter};
pub use matcher::{MessageMatcher, SettingMatcher, TagMatcher, parse_attributes};
pub use pipeline::{
    Extraction, RunConfig, RunResult, SettingType, WrittenOutput, default_setting_types, run,
};
pub use record::Record;
pub use scan::{ARDUINO_EXTENSIONS, files_under, has_extension, scan_files};
pub use xml::Element;
