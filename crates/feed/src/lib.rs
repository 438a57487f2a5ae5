// ABOUTME: Podcast RSS 2.0 feed generation library with iTunes namespace extensions.
// ABOUTME: Provides the channel/item model, item validation, the category taxonomy and the XML encoder.

pub mod categories;
pub mod duration;
pub mod encode;
pub mod error;
pub mod item;
pub mod models;
pub mod options;
pub mod podcast;
pub mod text;
pub mod time_format;

pub use categories::{
    is_top_level_category, is_valid_category, parse_categories, subcategories_of,
    APPLE_CATEGORIES,
};
pub use duration::format_duration;
pub use encode::{ATOM_NS, CONTENT_NS, ITUNES_NS};
pub use error::{FieldViolation, PodcastError, ValidationError};
pub use item::Item;
pub use models::{
    AtomLink, Author, Enclosure, EnclosureType, ICategory, IImage, ISummary, Image, Owner,
};
pub use options::EncodeOptions;
pub use podcast::Podcast;
pub use time_format::{format_rfc1123z, RFC1123Z};

/// Longest itunes:subtitle Apple accepts, in characters.
pub const SUBTITLE_MAX_CHARS: usize = 64;

/// Longest itunes:summary Apple accepts, in characters.
pub const SUMMARY_MAX_CHARS: usize = 4000;
