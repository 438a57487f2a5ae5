// ABOUTME: The podcast channel aggregate with its add_* mutators and add_item pipeline.
// ABOUTME: Empty input to any mutator leaves the existing value untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PodcastError;
use crate::item::Item;
use crate::models::{AtomLink, ICategory, IImage, ISummary, Image, Owner};
use crate::text::truncate_chars;
use crate::time_format::{format_or_now, format_rfc1123z};
use crate::{SUBTITLE_MAX_CHARS, SUMMARY_MAX_CHARS};

/// A podcast channel and its items.
///
/// Mutators take `&mut self`; callers sharing one `Podcast` across threads
/// must provide their own locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub title: String,
    pub link: String,
    pub description: String,
    pub category: Option<String>,
    pub copyright: Option<String>,
    pub docs: Option<String>,
    pub generator: Option<String>,
    pub language: Option<String>,
    pub last_build_date: String,
    pub managing_editor: Option<String>,
    pub pub_date: String,
    pub ttl: Option<u32>,
    pub web_master: Option<String>,
    pub image: Option<Image>,
    pub atom_link: Option<AtomLink>,

    pub i_author: Option<String>,
    pub i_subtitle: Option<String>,
    pub i_summary: Option<ISummary>,
    pub i_block: Option<String>,
    pub i_image: Option<IImage>,
    pub i_explicit: Option<String>,
    pub i_complete: Option<String>,
    pub i_new_feed_url: Option<String>,
    pub i_owner: Option<Owner>,
    pub i_categories: Vec<ICategory>,
    pub i_type: Option<String>,

    pub items: Vec<Item>,
}

impl Podcast {
    /// Creates a podcast. Missing timestamps default to the current UTC time,
    /// each on its own.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
        pub_date: Option<DateTime<Utc>>,
        last_build_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            pub_date: format_or_now(pub_date),
            last_build_date: format_or_now(last_build_date),
            generator: Some(format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )),
            ..Default::default()
        }
    }

    pub fn add_pub_date(&mut self, dt: DateTime<Utc>) {
        self.pub_date = format_rfc1123z(&dt);
    }

    pub fn add_last_build_date(&mut self, dt: DateTime<Utc>) {
        self.last_build_date = format_rfc1123z(&dt);
    }

    /// Sets itunes:author to the names joined by ", ".
    pub fn add_author<S: AsRef<str>>(&mut self, names: &[S]) {
        if names.is_empty() {
            return;
        }
        let joined = names
            .iter()
            .map(|n| n.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        self.i_author = Some(joined);
    }

    /// Adds one itunes:category node and points `category` at it.
    ///
    /// Repeated calls accumulate nodes, so a multi-category show calls this
    /// once per top-level category; `category` always holds the latest one.
    /// Empty sub-category names are dropped.
    pub fn add_category<S: AsRef<str>>(&mut self, category: &str, subcategories: &[S]) {
        if category.is_empty() {
            return;
        }

        let subs = subcategories
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .map(|s| ICategory {
                text: s.to_string(),
                i_categories: Vec::new(),
            })
            .collect();

        self.category = Some(category.to_string());
        self.i_categories.push(ICategory {
            text: category.to_string(),
            i_categories: subs,
        });
    }

    pub fn add_language(&mut self, language: &str) {
        set_if_present(&mut self.language, language);
    }

    pub fn add_copyright(&mut self, copyright: &str) {
        set_if_present(&mut self.copyright, copyright);
    }

    /// Sets the atom:link self reference for the feed's own URL.
    pub fn add_atom_link(&mut self, href: &str) {
        if href.is_empty() {
            return;
        }
        self.atom_link = Some(AtomLink::self_link(href));
    }

    pub fn add_new_feed_url(&mut self, url: &str) {
        set_if_present(&mut self.i_new_feed_url, url);
    }

    /// Maps "explicit" and "clean" onto itunes:explicit. Other values are ignored.
    pub fn add_parental_advisory(&mut self, advisory: &str) {
        match advisory {
            "explicit" => self.i_explicit = Some("true".to_string()),
            "clean" => self.i_explicit = Some("false".to_string()),
            _ => {}
        }
    }

    /// Sets both the RSS image block and itunes:image.
    pub fn add_image(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.image = Some(Image {
            url: url.to_string(),
            title: self.title.clone(),
            link: self.link.clone(),
        });
        self.i_image = Some(IImage {
            href: url.to_string(),
        });
    }

    /// Sets itunes:owner. An owner without an email is not set at all.
    pub fn add_owner(&mut self, name: &str, email: &str) {
        if email.is_empty() {
            return;
        }
        self.i_owner = Some(Owner {
            name: name.to_string(),
            email: email.to_string(),
        });
    }

    pub fn add_sub_title(&mut self, subtitle: &str) {
        if subtitle.is_empty() {
            return;
        }
        self.i_subtitle = Some(truncate_chars(subtitle, SUBTITLE_MAX_CHARS));
    }

    pub fn add_summary(&mut self, summary: &str) {
        if summary.is_empty() {
            return;
        }
        let text = truncate_chars(summary, SUMMARY_MAX_CHARS);
        if text.len() < summary.len() {
            tracing::debug!(max = SUMMARY_MAX_CHARS, "truncated itunes:summary");
        }
        self.i_summary = Some(ISummary { text });
    }

    /// Sets itunes:type verbatim; "episodic" and "serial" are the valid values.
    pub fn add_itunes_type(&mut self, show_type: &str) {
        set_if_present(&mut self.i_type, show_type);
    }

    /// Validates and normalizes `item`, then appends it.
    ///
    /// Returns the item count after the append. On error the item is dropped
    /// and `items` is left exactly as it was.
    pub fn add_item(&mut self, mut item: Item) -> Result<usize, PodcastError> {
        if let Err(err) = item.validate() {
            tracing::warn!(title = %item.title, error = %err, "rejected podcast item");
            return Err(err.into());
        }

        item.normalize();

        if !item.has_author() {
            let inherited = self
                .managing_editor
                .as_ref()
                .filter(|m| !m.is_empty())
                .or_else(|| self.i_author.as_ref().filter(|a| !a.is_empty()));
            if let Some(author) = inherited {
                item.i_author = Some(author.clone());
            }
        }

        if item.i_image.is_none() {
            if let Some(image) = &self.image {
                item.i_image = Some(IImage {
                    href: image.url.clone(),
                });
            }
        }

        tracing::debug!(guid = %item.guid, "added podcast item");
        self.items.push(item);
        Ok(self.items.len())
    }
}

fn set_if_present(field: &mut Option<String>, value: &str) {
    if !value.is_empty() {
        *field = Some(value.to_string());
    }
}
