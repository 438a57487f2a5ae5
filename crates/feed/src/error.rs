// ABOUTME: Error types for podcast feed building and encoding.
// ABOUTME: Provides PodcastError plus the structured ValidationError raised by add_item.

use std::fmt;
use std::io;
use thiserror::Error;

/// Errors that can occur while building or encoding a podcast feed.
#[derive(Debug, Error)]
pub enum PodcastError {
    /// An item was rejected by `Podcast::add_item`; the feed is unchanged.
    #[error("invalid item: {0}")]
    Validation(#[from] ValidationError),

    /// The sink refused or failed a write while encoding.
    #[error("write to sink failed: {0}")]
    Write(#[source] io::Error),
}

impl PodcastError {
    /// Returns the validation details when this is a rejected item.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            PodcastError::Validation(v) => Some(v),
            PodcastError::Write(_) => None,
        }
    }

    /// True when the sink failed during encoding.
    pub fn is_write(&self) -> bool {
        matches!(self, PodcastError::Write(_))
    }
}

/// A single missing or malformed field on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    TitleRequired,
    DescriptionRequired,
    EnclosureUrlRequired,
    EnclosureTypeRequired,
    LinkRequired,
}

impl FieldViolation {
    /// Name of the offending field as callers see it.
    pub fn field(&self) -> &'static str {
        match self {
            FieldViolation::TitleRequired => "Title",
            FieldViolation::DescriptionRequired => "Description",
            FieldViolation::EnclosureUrlRequired => "Enclosure.URL",
            FieldViolation::EnclosureTypeRequired => "Enclosure.Type",
            FieldViolation::LinkRequired => "Link",
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.field())
    }
}

/// Every violation found on one `add_item` attempt, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub(crate) fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn contains(&self, violation: FieldViolation) -> bool {
        self.violations.contains(&violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
