use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A named piece of already-decoded text handed to the compare engine.
///
/// `name` is the identity shown in reports. Names are expected to be unique
/// within a collection but the engine does not enforce it; deduplication is
/// up to whoever builds the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text as loaded, before normalization.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<N: Into<String>, C: Into<String>> From<(N, C)> for Document {
    fn from((name, content): (N, C)) -> Self {
        Self::new(name, content)
    }
}
