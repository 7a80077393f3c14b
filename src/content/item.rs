use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a renderable travel-content unit.
///
/// The content document spells these in lowercase (`"text"`, `"table"`, …).
/// Any other tag fails document validation at load time.
///
/// # Examples
///
/// ```
/// use guidebook_engine::content::item::ContentKind;
///
/// let kind: ContentKind = serde_json::from_str("\"note\"").unwrap();
/// assert_eq!(kind, ContentKind::Note);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Note,
    Recommendation,
    Table,
    Location,
    List,
}

impl ContentKind {
    /// All kinds, in document order of first appearance.
    pub const ALL: [ContentKind; 7] = [
        ContentKind::Text,
        ContentKind::Image,
        ContentKind::Note,
        ContentKind::Recommendation,
        ContentKind::Table,
        ContentKind::Location,
        ContentKind::List,
    ];

    /// The lowercase tag used in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Note => "note",
            ContentKind::Recommendation => "recommendation",
            ContentKind::Table => "table",
            ContentKind::Location => "location",
            ContentKind::List => "list",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One renderable unit of travel content.
///
/// The `body` string is interpreted according to `kind`: a table body is
/// pipe-and-newline delimited, a list body is comma delimited, an image body
/// names the asset, and every other kind treats the body as plain text.
///
/// Items carry no identifier; an item's identity is its position within the
/// sequence it was resolved from, which is stable across reloads of the same
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    kind: ContentKind,
    #[serde(rename = "content")]
    body: String,
}

impl ContentItem {
    pub fn new(kind: ContentKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
