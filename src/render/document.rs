//! Document — the finished, self-contained SVG

use base64::Engine;
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    markup: String,
}

impl Document {
    pub(crate) fn new(markup: String) -> Self {
        Self { markup }
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    pub fn len(&self) -> usize {
        self.markup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    /// SHA-256 of the markup, for comparing renders across hosts
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.markup.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// `data:` URI suitable for an `image` metadata field
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(self.markup.as_bytes())
        )
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.markup
    }
}
