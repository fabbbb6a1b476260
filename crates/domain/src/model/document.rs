use std::fmt;

/// Lower-cased text of a single input file.
///
/// Every counter and tokenizer in this crate expects normalized text, so
/// the only way to build a `Document` is through [`Document::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(raw: &str) -> Self {
        Self { text: raw.to_lowercase() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
