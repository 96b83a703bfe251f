//! Tag comment grammars.
//!
//! Two comment styles are recognized, each implemented as a [`TagMatcher`]:
//!
//! - state messages: `/*#NAME description */`
//! - settings: `/*TAG key="value" ...` followed by a multiline body
//!
//! Every match is minimal with respect to the closing `*/`, so two tagged
//! comments written back to back are always reported separately.

use std::sync::LazyLock;

use regex::Regex;

use super::{gutter::strip_gutter, record::Record, xml::Element};

/// Tag recorded on state message records.
pub const MESSAGE_TAG: &str = "#";

/// Root element of the state message database.
pub const MESSAGE_ROOT: &str = "MessageDB";
/// Element written for every state message.
pub const MESSAGE_ELEMENT: &str = "Message";

/// Root element of a setting database.
pub const SETTING_ROOT: &str = "settingList";
/// Element written for every setting.
pub const SETTING_ELEMENT: &str = "setting";

// Capture group 1: message name, 2: raw description
static MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*#(\w*)\s(.*?)\*/").unwrap());

// Capture group 1: tag keyword, 2: attribute line, 3: body lines.
// The attribute line is lazy so a one-line comment ends at its own `*/`.
static SETTING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*(\w+)\s([^\n]*?)((?:\n.*?)?)\*/").unwrap());

// key="value"
static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\S*)="(.*?)""#).unwrap());

/// A comment grammar plus the way its records are written out.
pub trait TagMatcher {
    /// Find every tagged comment in `source`, in order of appearance.
    ///
    /// `path` is stored on each record as-is.
    fn find(&self, path: &str, source: &str) -> Vec<Record>;

    /// Build the XML element for one record found by this matcher.
    fn element(&self, record: &Record) -> Element;
}

/// Matches `/*#NAME description*/` state message comments.
#[derive(Debug, Clone)]
pub struct MessageMatcher {
    separator: String,
}

impl MessageMatcher {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl TagMatcher for MessageMatcher {
    fn find(&self, path: &str, source: &str) -> Vec<Record> {
        MESSAGE_REGEX
            .captures_iter(source)
            .map(|caps| {
                let name = caps.get(1).map_or("", |m| m.as_str());
                let description = caps.get(2).map_or("", |m| m.as_str());
                Record {
                    tag: MESSAGE_TAG.to_string(),
                    name: Some(name.to_string()),
                    path: path.to_string(),
                    attributes: Vec::new(),
                    text: strip_gutter(description, &self.separator).into_owned(),
                }
            })
            .collect()
    }

    fn element(&self, record: &Record) -> Element {
        Element::new(MESSAGE_ELEMENT)
            .with_attribute("path", &record.path)
            .with_attribute("name", record.name.as_deref().unwrap_or_default())
            .with_text(&record.text)
    }
}

/// Matches attributed setting comments whose tag is one of `tags`.
///
/// ```text
/// /*AIRSETTING index="0" name="Gain" min="0.0" max="1.0" def="0.003"
///  * Full length setting
///  * description over multiple lines
///  */
/// ```
#[derive(Debug, Clone)]
pub struct SettingMatcher {
    tags: Vec<String>,
    separator: String,
}

impl SettingMatcher {
    pub fn new(tags: Vec<String>, separator: impl Into<String>) -> Self {
        Self {
            tags,
            separator: separator.into(),
        }
    }
}

impl TagMatcher for SettingMatcher {
    fn find(&self, path: &str, source: &str) -> Vec<Record> {
        SETTING_REGEX
            .captures_iter(source)
            .filter_map(|caps| {
                let tag = caps.get(1)?.as_str();
                if !self.tags.iter().any(|t| t == tag) {
                    return None;
                }
                let attributes = parse_attributes(caps.get(2).map_or("", |m| m.as_str()));
                let body = caps.get(3).map_or("", |m| m.as_str());

                let mut record = Record {
                    tag: tag.to_string(),
                    name: None,
                    path: path.to_string(),
                    attributes,
                    text: strip_gutter(body, &self.separator).into_owned(),
                };
                record.name = record.attribute("name").map(String::from);
                Some(record)
            })
            .collect()
    }

    fn element(&self, record: &Record) -> Element {
        record
            .attributes
            .iter()
            .fold(Element::new(SETTING_ELEMENT), |element, (key, value)| {
                element.with_attribute(key, value)
            })
            .with_text(&record.text)
    }
}

/// Parse every `key="value"` pair on an attribute line.
///
/// Pairs keep the position of their first appearance; a repeated key takes
/// the last value given. Pairs whose key is not a valid XML attribute name
/// (empty, `a<b`, `1x`, ...) are dropped.
pub fn parse_attributes(line: &str) -> Vec<(String, String)> {
    let mut attributes: Vec<(String, String)> = Vec::new();

    for caps in ATTRIBUTE_REGEX.captures_iter(line) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        if !is_xml_name(key) {
            continue;
        }
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => attributes.push((key.to_string(), value.to_string())),
        }
    }

    attributes
}

fn is_xml_name(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || matches!(first, '_' | ':'))
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}
