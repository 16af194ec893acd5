use std::fmt;
use std::str::FromStr;

/// Kind of content handed to the generator.
///
/// `Url` sources carry the address itself as content; fetching the page is
/// the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Text,
    Url,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::Url => "url",
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "text" => Ok(SourceKind::Text),
            "url" => Ok(SourceKind::Url),
            other => Err(format!("unsupported source type: {}", other)),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw material the podcast script is written from.
#[derive(Debug, Clone)]
pub struct ContentSource {
    pub kind: SourceKind,
    pub content: String,
}

impl ContentSource {
    pub fn new(kind: SourceKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}
