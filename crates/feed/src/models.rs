// ABOUTME: Value types shared by the podcast channel and its items.
// ABOUTME: Enclosure, media types, authors, owners, images, summaries and category nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media formats accepted for an item enclosure.
///
/// The numeric codes start at 1; 0 and anything past the last variant are
/// not media types, which is what `TryFrom<u8>` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnclosureType {
    M4a = 1,
    M4v,
    Mp4,
    Mp3,
    Mov,
    Pdf,
    Epub,
}

impl EnclosureType {
    /// MIME type written to the enclosure `type` attribute.
    pub fn mime_type(&self) -> &'static str {
        match self {
            EnclosureType::M4a => "audio/x-m4a",
            EnclosureType::M4v => "video/x-m4v",
            EnclosureType::Mp4 => "video/mp4",
            EnclosureType::Mp3 => "audio/mpeg",
            EnclosureType::Mov => "video/quicktime",
            EnclosureType::Pdf => "application/pdf",
            EnclosureType::Epub => "document/x-epub",
        }
    }
}

impl fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

impl TryFrom<u8> for EnclosureType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EnclosureType::M4a),
            2 => Ok(EnclosureType::M4v),
            3 => Ok(EnclosureType::Mp4),
            4 => Ok(EnclosureType::Mp3),
            5 => Ok(EnclosureType::Mov),
            6 => Ok(EnclosureType::Pdf),
            7 => Ok(EnclosureType::Epub),
            other => Err(other),
        }
    }
}

/// The downloadable asset attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    /// `None` means no recognized media type was given.
    pub enclosure_type: Option<EnclosureType>,
    /// Size of the asset; negative values are clamped to 0 by `add_item`.
    pub length: i64,
}

/// An item author; rendered as `email (name)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub(crate) fn formatted(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} ({})", self.email, self.name)
        }
    }
}

/// The itunes:owner block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

/// The plain RSS channel image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
}

/// The itunes:image element, carried as an `href` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IImage {
    pub href: String,
}

/// The itunes:summary element, written as CDATA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ISummary {
    pub text: String,
}

/// One itunes:category node with its nested sub-categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ICategory {
    pub text: String,
    pub i_categories: Vec<ICategory>,
}

/// The atom:link self reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomLink {
    pub href: String,
    pub rel: String,
    pub link_type: String,
}

impl AtomLink {
    pub fn self_link(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: "self".to_string(),
            link_type: "application/rss+xml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosure_type_codes() {
        assert_eq!(EnclosureType::try_from(4), Ok(EnclosureType::Mp3));
        assert_eq!(EnclosureType::try_from(7), Ok(EnclosureType::Epub));
        assert_eq!(EnclosureType::try_from(0), Err(0));
        assert_eq!(EnclosureType::try_from(99), Err(99));
    }

    #[test]
    fn test_enclosure_type_display() {
        assert_eq!(EnclosureType::Mp3.to_string(), "audio/mpeg");
        assert_eq!(EnclosureType::M4a.to_string(), "audio/x-m4a");
        assert_eq!(EnclosureType::Mov.mime_type(), "video/quicktime");
    }

    #[test]
    fn test_author_formatted() {
        let author = Author {
            name: "Jane Doe".into(),
            email: "me@janedoe.com".into(),
        };
        assert_eq!(author.formatted(), "me@janedoe.com (Jane Doe)");
        let bare = Author {
            name: String::new(),
            email: "me@janedoe.com".into(),
        };
        assert_eq!(bare.formatted(), "me@janedoe.com");
    }
}
