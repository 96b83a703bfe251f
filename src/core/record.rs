/// One tagged comment extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Tag keyword that introduced the comment (`#` for state messages).
    pub tag: String,
    /// Identifier used for collision detection.
    ///
    /// `None` for settings without a `name` attribute.
    pub name: Option<String>,
    /// Source path relative to the scan root, `/`-separated.
    pub path: String,
    /// Attributes in order of first appearance.
    pub attributes: Vec<(String, String)>,
    /// Description with the comment gutter removed.
    pub text: String,
}

impl Record {
    /// Value of the attribute `key`, if the comment declared it.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
