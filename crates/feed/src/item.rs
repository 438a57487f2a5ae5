// ABOUTME: A single podcast entry and its item-level mutators.
// ABOUTME: Validation and normalization happen when the item is handed to Podcast::add_item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::format_duration;
use crate::error::{FieldViolation, ValidationError};
use crate::models::{Author, Enclosure, EnclosureType, IImage, ISummary};
use crate::text::truncate_chars;
use crate::SUMMARY_MAX_CHARS;

/// One entry in a podcast.
///
/// Articles need a title, description and link. Episodes need a title,
/// description and an enclosure with both a URL and a media type; the link
/// and guid then default from the enclosure URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub guid: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub content_encoded: Option<String>,
    pub author: Option<Author>,
    pub category: Option<String>,
    pub comments: Option<String>,
    pub source: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub enclosure: Option<Enclosure>,

    pub i_author: Option<String>,
    pub i_subtitle: Option<String>,
    pub i_summary: Option<ISummary>,
    pub i_image: Option<IImage>,
    pub i_duration: Option<String>,
    pub i_explicit: Option<String>,
    pub i_is_closed_captioned: Option<String>,
    pub i_order: Option<String>,
}

impl Item {
    /// Attaches the downloadable asset, replacing any previous one.
    pub fn add_enclosure(
        &mut self,
        url: impl Into<String>,
        enclosure_type: EnclosureType,
        length: i64,
    ) {
        self.enclosure = Some(Enclosure {
            url: url.into(),
            enclosure_type: Some(enclosure_type),
            length,
        });
    }

    /// Sets the episode artwork. Empty URLs are ignored.
    pub fn add_image(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.i_image = Some(IImage {
            href: url.to_string(),
        });
    }

    pub fn add_pub_date(&mut self, dt: DateTime<Utc>) {
        self.pub_date = Some(dt);
    }

    /// Sets itunes:summary, cut to the directory limit. Empty text is ignored.
    pub fn add_summary(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.i_summary = Some(ISummary {
            text: truncate_chars(text, SUMMARY_MAX_CHARS),
        });
    }

    /// Sets itunes:duration from whole seconds.
    pub fn add_duration(&mut self, seconds: i64) {
        self.i_duration = Some(format_duration(seconds));
    }

    /// True when the item names its own author in either form.
    pub(crate) fn has_author(&self) -> bool {
        self.author.is_some() || self.i_author.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Collects every missing field, in the order callers expect to fix them.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let mut err = ValidationError::default();

        if self.title.is_empty() {
            err.push(FieldViolation::TitleRequired);
        }
        if self.description.is_empty() {
            err.push(FieldViolation::DescriptionRequired);
        }

        match &self.enclosure {
            Some(enclosure) => {
                if enclosure.url.is_empty() {
                    err.push(FieldViolation::EnclosureUrlRequired);
                }
                if enclosure.enclosure_type.is_none() {
                    err.push(FieldViolation::EnclosureTypeRequired);
                }
            }
            None if self.link.is_empty() => err.push(FieldViolation::LinkRequired),
            None => {}
        }

        if err.is_empty() {
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Fills derived fields on an item that already passed validation.
    pub(crate) fn normalize(&mut self) {
        if let Some(enclosure) = self.enclosure.as_mut() {
            if enclosure.length < 0 {
                enclosure.length = 0;
            }
            if self.link.is_empty() {
                self.link = enclosure.url.clone();
            }
        }

        if self.guid.is_empty() {
            self.guid = self.link.clone();
        }

        if self.i_author.as_deref().map_or(true, str::is_empty) {
            if let Some(author) = &self.author {
                if !author.email.is_empty() {
                    self.i_author = Some(author.email.clone());
                }
            }
        }
    }
}
