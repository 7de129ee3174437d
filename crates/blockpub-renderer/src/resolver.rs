//! Collaborator traits: relation metadata and asset URL resolution.
//!
//! The dispatch core never touches storage or the network; everything it
//! needs from the outside world comes through these two seams. The
//! bundled-vs-custom relation store and the actual URL schemes are host
//! concerns.

use crate::error::AssetError;

/// Resolves a relation key to its display metadata.
pub trait RelationResolver {
    /// Display name and format for a relation key, or `None` when the
    /// key is unknown (deleted or never defined).
    fn relation_info(&self, key: &str) -> Option<RelationInfo>;
}

/// Display metadata of a relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationInfo {
    pub name: String,
    pub format: RelationFormat,
}

/// Value format of a relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelationFormat {
    #[default]
    LongText,
    ShortText,
    Number,
    Status,
    Tag,
    Date,
    File,
    Checkbox,
    Url,
    Email,
    Phone,
    Object,
}

impl RelationFormat {
    /// Presentation class for this format.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::LongText => "c-longText",
            Self::ShortText => "c-shortText",
            Self::Number => "c-number",
            Self::Status | Self::Tag => "c-select",
            Self::Date => "c-date",
            Self::File => "c-file",
            Self::Checkbox => "c-checkbox",
            Self::Url => "c-url",
            Self::Email => "c-email",
            Self::Phone => "c-phone",
            Self::Object => "c-object",
        }
    }

    /// Whether values of this format are rendered as a list of items.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Self::Status | Self::Tag | Self::File | Self::Object)
    }
}

/// Resolves object, file and emoji references to URLs.
pub trait AssetResolver {
    /// Resolvable URL for a file object.
    fn file_url(&self, id: &str) -> Result<String, AssetError>;

    /// Deep link to another document object.
    fn object_link(&self, id: &str) -> Result<String, AssetError>;

    /// CDN URL for an emoji glyph. Infallible: emoji URLs are derived
    /// from the code point alone.
    fn emoji_url(&self, emoji: char) -> String;
}

/// Relation resolver that knows no relations. Every key renders as
/// deleted.
pub struct NoRelations;

impl RelationResolver for NoRelations {
    fn relation_info(&self, _key: &str) -> Option<RelationInfo> {
        None
    }
}

/// Asset resolver that resolves nothing. Every reference degrades to a
/// placeholder.
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn file_url(&self, id: &str) -> Result<String, AssetError> {
        Err(AssetError::NotFound { id: id.to_owned() })
    }

    fn object_link(&self, id: &str) -> Result<String, AssetError> {
        Err(AssetError::NotFound { id: id.to_owned() })
    }

    fn emoji_url(&self, _emoji: char) -> String {
        String::new()
    }
}
