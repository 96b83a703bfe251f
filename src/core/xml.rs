//! Minimal XML tree and serializer for the dashboard databases.
//!
//! Output is compact (no indentation, no XML declaration) and pure ASCII:
//! characters outside ASCII are written as decimal character references so
//! the file is valid regardless of the reader's assumed encoding.

use std::{borrow::Cow, fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};

/// An XML element with ordered attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing the value of an existing one in place.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Serialize this element and its children.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml_string())
            .with_context(|| format!("Failed to write XML file: {}", path.display()))
    }

    fn render(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", key, encode_attribute(value));
        }

        let text = self.text.as_deref().unwrap_or_default();
        if text.is_empty() && self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        out.push_str(&encode_text(text));
        for child in &self.children {
            child.render(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Escape element text content.
pub fn encode_text(input: &str) -> Cow<'_, str> {
    // Fast path: nothing to escape
    if input.is_ascii() && !input.bytes().any(|b| matches!(b, b'<' | b'>' | b'&')) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            c if !c.is_ascii() => push_char_ref(&mut result, c),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape an attribute value for use inside double quotes.
///
/// Whitespace control characters are escaped so they survive attribute
/// value normalization on read.
pub fn encode_attribute(input: &str) -> Cow<'_, str> {
    if input.is_ascii()
        && !input
            .bytes()
            .any(|b| matches!(b, b'<' | b'>' | b'&' | b'"' | b'\n' | b'\r' | b'\t'))
    {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#09;"),
            c if !c.is_ascii() => push_char_ref(&mut result, c),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn push_char_ref(out: &mut String, c: char) {
    let _ = write!(out, "&#{};", c as u32);
}
