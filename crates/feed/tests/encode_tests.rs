// ABOUTME: Integration tests for RSS encoding of a populated podcast.
// ABOUTME: Checks namespaces, element presence and order, omitted optionals, and sink failures.

use chrono::{TimeZone, Utc};
use podcast_feed::{EncodeOptions, EnclosureType, Item, Podcast, ATOM_NS, CONTENT_NS, ITUNES_NS};
use std::io::{self, Write};

struct ErrWriter;

impl Write for ErrWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "it was bad"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sample_podcast() -> Podcast {
    let created = Utc.with_ymd_and_hms(2017, 2, 1, 8, 21, 52).unwrap();
    let mut p = Podcast::new(
        "eduncan911 Podcasts",
        "http://eduncan911.com/",
        "An example Podcast",
        Some(created),
        Some(created),
    );
    p.add_author(&["Jane Doe"]);
    p.add_atom_link("http://eduncan911.com/atom.rss");
    p.add_image("http://janedoe.com/i.jpg");
    p.add_summary("link <a href=\"http://example.com\">example.com</a>");
    p.add_language("en-us");
    p.add_category("Arts", &["Books"]);
    p.add_owner("Jane Doe", "jane@example.com");
    p.add_parental_advisory("clean");
    p.add_itunes_type("serial");

    for n in 1..=2 {
        let mut item = Item {
            title: format!("Episode {n}"),
            description: format!("Description for Episode {n}"),
            ..Default::default()
        };
        item.add_enclosure(
            format!("http://example.com/{n}.mp3"),
            EnclosureType::Mp3,
            55 * n,
        );
        item.add_pub_date(created);
        item.add_duration(125);
        p.add_item(item).unwrap();
    }
    p
}

fn encode_to_string(p: &Podcast) -> String {
    let mut buf = Vec::new();
    p.encode(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_encode_writer_error() {
    let p = Podcast::new("title", "desc", "Link", None, None);
    let err = p.encode(ErrWriter).unwrap_err();
    assert!(err.is_write());
    let msg = err.to_string();
    assert!(msg.contains("write to sink failed"), "got: {msg}");
    assert!(msg.contains("it was bad"), "got: {msg}");
}

#[test]
fn test_encode_declares_namespaces() {
    let xml = encode_to_string(&sample_podcast());
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(&format!(r#"xmlns:itunes="{ITUNES_NS}""#)));
    assert!(xml.contains(&format!(r#"xmlns:content="{CONTENT_NS}""#)));
    assert!(xml.contains(&format!(r#"xmlns:atom="{ATOM_NS}""#)));
    assert!(xml.contains(r#"<rss version="2.0""#));
    assert!(xml.trim_end().ends_with("</rss>"));
}

#[test]
fn test_encode_channel_fields() {
    let xml = encode_to_string(&sample_podcast());
    assert!(xml.contains("<title>eduncan911 Podcasts</title>"));
    assert!(xml.contains("<pubDate>Wed, 01 Feb 2017 08:21:52 +0000</pubDate>"));
    assert!(xml.contains("<lastBuildDate>Wed, 01 Feb 2017 08:21:52 +0000</lastBuildDate>"));
    assert!(xml.contains("<category>Arts</category>"));
    assert!(xml.contains("<language>en-us</language>"));
    assert!(xml.contains("<itunes:author>Jane Doe</itunes:author>"));
    assert!(xml.contains("<itunes:explicit>false</itunes:explicit>"));
    assert!(xml.contains("<itunes:type>serial</itunes:type>"));
    assert!(xml.contains(r#"<itunes:image href="http://janedoe.com/i.jpg"/>"#));
    assert!(xml.contains(
        r#"<atom:link href="http://eduncan911.com/atom.rss" rel="self" type="application/rss+xml"/>"#
    ));
    assert!(xml.contains("<itunes:email>jane@example.com</itunes:email>"));
    assert!(xml.contains(
        r#"<![CDATA[link <a href="http://example.com">example.com</a>]]>"#
    ));
}

#[test]
fn test_encode_items_in_order() {
    let xml = encode_to_string(&sample_podcast());
    let first = xml.find("<title>Episode 1</title>").unwrap();
    let second = xml.find("<title>Episode 2</title>").unwrap();
    assert!(first < second);
    assert_eq!(xml.matches("<item>").count(), 2);
    assert!(xml.contains(
        r#"<enclosure url="http://example.com/2.mp3" length="110" type="audio/mpeg"/>"#
    ));
    assert!(xml.contains("<guid>http://example.com/1.mp3</guid>"));
    assert!(xml.contains("<itunes:duration>2:05</itunes:duration>"));
}

#[test]
fn test_encode_channel_field_order() {
    let xml = encode_to_string(&sample_podcast());
    let order = [
        "<title>",
        "<link>",
        "<description>",
        "<category>",
        "<generator>",
        "<language>",
        "<lastBuildDate>",
        "<pubDate>",
        "<image>",
        "<atom:link",
        "<itunes:author>",
        "<itunes:summary>",
        "<itunes:image",
        "<itunes:explicit>",
        "<itunes:owner>",
        "<itunes:category",
        "<itunes:type>",
        "<item>",
    ];
    let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_encode_omits_unset_optionals() {
    let p = Podcast::new("title", "link", "description", None, None);
    let xml = encode_to_string(&p);
    for absent in [
        "<copyright",
        "<language",
        "<image",
        "<atom:link",
        "<itunes:author",
        "<itunes:summary",
        "<itunes:owner",
        "<itunes:category",
        "<itunes:explicit",
        "<item>",
    ] {
        assert!(!xml.contains(absent), "unexpected {absent} in {xml}");
    }
}

#[test]
fn test_encode_escapes_text() {
    let p = Podcast::new("Tom & Jerry <live>", "link", "description", None, None);
    let xml = encode_to_string(&p);
    assert!(xml.contains("<title>Tom &amp; Jerry &lt;live&gt;</title>"));
}

#[test]
fn test_encode_with_options_and_display() {
    let p = sample_podcast();
    let mut buf = Vec::new();
    p.encode_with(&EncodeOptions::new().compact().xml_declaration(false), &mut buf)
        .unwrap();
    let compact = String::from_utf8(buf).unwrap();
    assert!(compact.starts_with("<rss "));
    assert!(!compact.contains('\n'));

    let shown = p.to_string();
    assert!(shown.starts_with("<?xml"));
    assert!(shown.contains("<title>Episode 2</title>"));
}
