// ABOUTME: RSS 2.0 serializer with itunes, content and atom namespace elements.
// ABOUTME: Field order is fixed by the CHANNEL_FIELDS and ITEM_FIELDS tables below.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt;
use std::io::{self, Write};

use crate::error::PodcastError;
use crate::item::Item;
use crate::models::ICategory;
use crate::options::EncodeOptions;
use crate::podcast::Podcast;
use crate::time_format::format_rfc1123z;

pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

type Render<T> = fn(&mut Emitter, &'static str, &T) -> io::Result<()>;

/// Channel elements in emission order.
const CHANNEL_FIELDS: &[(&str, Render<Podcast>)] = &[
    ("title", |e, tag, p| e.text(tag, &p.title)),
    ("link", |e, tag, p| e.text(tag, &p.link)),
    ("description", |e, tag, p| e.text(tag, &p.description)),
    ("category", |e, tag, p| e.opt_text(tag, p.category.as_deref())),
    ("copyright", |e, tag, p| e.opt_text(tag, p.copyright.as_deref())),
    ("docs", |e, tag, p| e.opt_text(tag, p.docs.as_deref())),
    ("generator", |e, tag, p| e.opt_text(tag, p.generator.as_deref())),
    ("language", |e, tag, p| e.opt_text(tag, p.language.as_deref())),
    ("lastBuildDate", |e, tag, p| e.opt_text(tag, Some(p.last_build_date.as_str()))),
    ("managingEditor", |e, tag, p| {
        e.opt_text(tag, p.managing_editor.as_deref())
    }),
    ("pubDate", |e, tag, p| e.opt_text(tag, Some(p.pub_date.as_str()))),
    ("ttl", |e, tag, p| {
        e.opt_text(tag, p.ttl.map(|t| t.to_string()).as_deref())
    }),
    ("webMaster", |e, tag, p| e.opt_text(tag, p.web_master.as_deref())),
    ("image", |e, tag, p| match &p.image {
        Some(image) => {
            e.start(BytesStart::new(tag))?;
            e.text("url", &image.url)?;
            e.text("title", &image.title)?;
            e.text("link", &image.link)?;
            e.end(tag)
        }
        None => Ok(()),
    }),
    ("atom:link", |e, tag, p| match &p.atom_link {
        Some(link) => {
            let mut el = BytesStart::new(tag);
            el.push_attribute(("href", link.href.as_str()));
            el.push_attribute(("rel", link.rel.as_str()));
            el.push_attribute(("type", link.link_type.as_str()));
            e.empty(el)
        }
        None => Ok(()),
    }),
    ("itunes:author", |e, tag, p| e.opt_text(tag, p.i_author.as_deref())),
    ("itunes:subtitle", |e, tag, p| {
        e.opt_text(tag, p.i_subtitle.as_deref())
    }),
    ("itunes:summary", |e, tag, p| {
        e.opt_cdata(tag, p.i_summary.as_ref().map(|s| s.text.as_str()))
    }),
    ("itunes:block", |e, tag, p| e.opt_text(tag, p.i_block.as_deref())),
    ("itunes:image", |e, tag, p| {
        e.opt_href(tag, p.i_image.as_ref().map(|i| i.href.as_str()))
    }),
    ("itunes:explicit", |e, tag, p| {
        e.opt_text(tag, p.i_explicit.as_deref())
    }),
    ("itunes:complete", |e, tag, p| {
        e.opt_text(tag, p.i_complete.as_deref())
    }),
    ("itunes:new-feed-url", |e, tag, p| {
        e.opt_text(tag, p.i_new_feed_url.as_deref())
    }),
    ("itunes:owner", |e, tag, p| match &p.i_owner {
        Some(owner) => {
            e.start(BytesStart::new(tag))?;
            e.opt_text("itunes:name", Some(owner.name.as_str()))?;
            e.text("itunes:email", &owner.email)?;
            e.end(tag)
        }
        None => Ok(()),
    }),
    ("itunes:category", |e, tag, p| {
        p.i_categories.iter().try_for_each(|c| e.category(tag, c))
    }),
    ("itunes:type", |e, tag, p| e.opt_text(tag, p.i_type.as_deref())),
    ("item", |e, tag, p| p.items.iter().try_for_each(|i| e.item(tag, i))),
];

/// Item elements in emission order.
const ITEM_FIELDS: &[(&str, Render<Item>)] = &[
    ("guid", |e, tag, i| e.text(tag, &i.guid)),
    ("title", |e, tag, i| e.text(tag, &i.title)),
    ("link", |e, tag, i| e.text(tag, &i.link)),
    ("description", |e, tag, i| e.text(tag, &i.description)),
    ("content:encoded", |e, tag, i| {
        e.opt_cdata(tag, i.content_encoded.as_deref())
    }),
    ("author", |e, tag, i| {
        e.opt_text(tag, i.author.as_ref().map(|a| a.formatted()).as_deref())
    }),
    ("category", |e, tag, i| e.opt_text(tag, i.category.as_deref())),
    ("comments", |e, tag, i| e.opt_text(tag, i.comments.as_deref())),
    ("source", |e, tag, i| e.opt_text(tag, i.source.as_deref())),
    ("pubDate", |e, tag, i| {
        e.opt_text(tag, i.pub_date.map(|d| format_rfc1123z(&d)).as_deref())
    }),
    ("enclosure", |e, tag, i| match &i.enclosure {
        Some(enc) => {
            let length = enc.length.max(0).to_string();
            let mut el = BytesStart::new(tag);
            el.push_attribute(("url", enc.url.as_str()));
            el.push_attribute(("length", length.as_str()));
            if let Some(kind) = enc.enclosure_type {
                el.push_attribute(("type", kind.mime_type()));
            }
            e.empty(el)
        }
        None => Ok(()),
    }),
    ("itunes:author", |e, tag, i| e.opt_text(tag, i.i_author.as_deref())),
    ("itunes:subtitle", |e, tag, i| {
        e.opt_text(tag, i.i_subtitle.as_deref())
    }),
    ("itunes:summary", |e, tag, i| {
        e.opt_cdata(tag, i.i_summary.as_ref().map(|s| s.text.as_str()))
    }),
    ("itunes:image", |e, tag, i| {
        e.opt_href(tag, i.i_image.as_ref().map(|img| img.href.as_str()))
    }),
    ("itunes:duration", |e, tag, i| {
        e.opt_text(tag, i.i_duration.as_deref())
    }),
    ("itunes:explicit", |e, tag, i| {
        e.opt_text(tag, i.i_explicit.as_deref())
    }),
    ("itunes:isClosedCaptioned", |e, tag, i| {
        e.opt_text(tag, i.i_is_closed_captioned.as_deref())
    }),
    ("itunes:order", |e, tag, i| e.opt_text(tag, i.i_order.as_deref())),
];

/// Thin wrapper over the quick-xml writer with the element shapes RSS uses.
struct Emitter {
    writer: Writer<Vec<u8>>,
}

impl Emitter {
    fn new(options: &EncodeOptions) -> Self {
        let writer = if options.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', options.indent)
        } else {
            Writer::new(Vec::new())
        };
        Self { writer }
    }

    fn start(&mut self, el: BytesStart<'_>) -> io::Result<()> {
        self.writer.write_event(Event::Start(el))
    }

    fn end(&mut self, tag: &str) -> io::Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))
    }

    fn empty(&mut self, el: BytesStart<'_>) -> io::Result<()> {
        self.writer.write_event(Event::Empty(el))
    }

    /// Always written, even when empty.
    fn text(&mut self, tag: &str, value: &str) -> io::Result<()> {
        self.start(BytesStart::new(tag))?;
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        self.end(tag)
    }

    fn opt_text(&mut self, tag: &str, value: Option<&str>) -> io::Result<()> {
        match value {
            Some(v) if !v.is_empty() => self.text(tag, v),
            _ => Ok(()),
        }
    }

    fn opt_cdata(&mut self, tag: &str, value: Option<&str>) -> io::Result<()> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        self.start(BytesStart::new(tag))?;
        // "]]>" cannot appear inside one CDATA section; split around it.
        let mut parts = value.split("]]>").peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                let head = format!("{}]]", part);
                self.writer.write_event(Event::CData(BytesCData::new(head)))?;
                self.writer.write_event(Event::CData(BytesCData::new(">")))?;
            } else {
                self.writer.write_event(Event::CData(BytesCData::new(part)))?;
            }
        }
        self.end(tag)
    }

    fn opt_href(&mut self, tag: &str, href: Option<&str>) -> io::Result<()> {
        match href {
            Some(h) if !h.is_empty() => {
                let mut el = BytesStart::new(tag);
                el.push_attribute(("href", h));
                self.empty(el)
            }
            _ => Ok(()),
        }
    }

    fn category(&mut self, tag: &'static str, node: &ICategory) -> io::Result<()> {
        let mut el = BytesStart::new(tag);
        el.push_attribute(("text", node.text.as_str()));
        if node.i_categories.is_empty() {
            return self.empty(el);
        }
        self.start(el)?;
        for sub in &node.i_categories {
            self.category(tag, sub)?;
        }
        self.end(tag)
    }

    fn item(&mut self, tag: &str, item: &Item) -> io::Result<()> {
        self.start(BytesStart::new(tag))?;
        for &(field, render) in ITEM_FIELDS {
            render(self, field, item)?;
        }
        self.end(tag)
    }

    fn document(mut self, podcast: &Podcast, options: &EncodeOptions) -> io::Result<Vec<u8>> {
        if options.xml_declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:itunes", ITUNES_NS));
        rss.push_attribute(("xmlns:content", CONTENT_NS));
        rss.push_attribute(("xmlns:atom", ATOM_NS));
        self.start(rss)?;
        self.start(BytesStart::new("channel"))?;
        for &(field, render) in CHANNEL_FIELDS {
            render(&mut self, field, podcast)?;
        }
        self.end("channel")?;
        self.end("rss")?;

        Ok(self.writer.into_inner())
    }
}

impl Podcast {
    /// Writes the feed to `sink` using default options.
    pub fn encode<W: Write>(&self, sink: W) -> Result<(), PodcastError> {
        self.encode_with(&EncodeOptions::default(), sink)
    }

    /// Renders the whole document first, then hands it to `sink` in one
    /// write. A sink failure is returned as `PodcastError::Write`; bytes the
    /// sink accepted before failing are not rolled back.
    pub fn encode_with<W: Write>(
        &self,
        options: &EncodeOptions,
        mut sink: W,
    ) -> Result<(), PodcastError> {
        let bytes = self.render(options)?;
        sink.write_all(&bytes).map_err(PodcastError::Write)?;
        sink.flush().map_err(PodcastError::Write)?;
        tracing::debug!(
            bytes = bytes.len(),
            items = self.items.len(),
            "encoded podcast feed"
        );
        Ok(())
    }

    /// The encoded document with default options.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PodcastError> {
        self.render(&EncodeOptions::default())
    }

    pub fn to_bytes_with(&self, options: &EncodeOptions) -> Result<Vec<u8>, PodcastError> {
        self.render(options)
    }

    fn render(&self, options: &EncodeOptions) -> Result<Vec<u8>, PodcastError> {
        Emitter::new(options)
            .document(self, options)
            .map_err(PodcastError::Write)
    }
}

impl fmt::Display for Podcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}
