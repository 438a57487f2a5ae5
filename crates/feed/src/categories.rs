// ABOUTME: Apple Podcasts category taxonomy and the flat-list category parser.
// ABOUTME: The table is static, built lazily once and only ever read.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// Top-level categories paired with their allowed sub-categories.
pub const APPLE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Arts",
        &[
            "Books",
            "Design",
            "Fashion & Beauty",
            "Food",
            "Performing Arts",
            "Visual Arts",
        ],
    ),
    (
        "Business",
        &[
            "Careers",
            "Entrepreneurship",
            "Investing",
            "Management",
            "Marketing",
            "Non-Profit",
        ],
    ),
    ("Comedy", &["Comedy Interviews", "Improv", "Stand-Up"]),
    (
        "Education",
        &["Courses", "How To", "Language Learning", "Self-Improvement"],
    ),
    ("Fiction", &["Comedy Fiction", "Drama", "Science Fiction"]),
    ("Government", &[]),
    ("History", &[]),
    (
        "Health & Fitness",
        &[
            "Alternative Health",
            "Fitness",
            "Medicine",
            "Mental Health",
            "Nutrition",
            "Sexuality",
        ],
    ),
    (
        "Kids & Family",
        &[
            "Education for Kids",
            "Parenting",
            "Pets & Animals",
            "Stories for Kids",
        ],
    ),
    (
        "Leisure",
        &[
            "Animation & Manga",
            "Automotive",
            "Aviation",
            "Crafts",
            "Games",
            "Hobbies",
            "Home & Garden",
            "Video Games",
        ],
    ),
    (
        "Music",
        &["Music Commentary", "Music History", "Music Interviews"],
    ),
    (
        "News",
        &[
            "Business News",
            "Daily News",
            "Entertainment News",
            "News Commentary",
            "Politics",
            "Sports News",
            "Tech News",
        ],
    ),
    (
        "Religion & Spirituality",
        &[
            "Buddhism",
            "Christianity",
            "Hinduism",
            "Islam",
            "Judaism",
            "Religion",
            "Spirituality",
        ],
    ),
    (
        "Science",
        &[
            "Astronomy",
            "Chemistry",
            "Earth Sciences",
            "Life Sciences",
            "Mathematics",
            "Natural Sciences",
            "Nature",
            "Physics",
            "Social Sciences",
        ],
    ),
    (
        "Society & Culture",
        &[
            "Documentary",
            "Personal Journals",
            "Philosophy",
            "Places & Travel",
            "Relationships",
        ],
    ),
    (
        "Sports",
        &[
            "Baseball",
            "Basketball",
            "Cricket",
            "Fantasy Sports",
            "Football",
            "Golf",
            "Hockey",
            "Rugby",
            "Running",
            "Soccer",
            "Swimming",
            "Tennis",
            "Volleyball",
            "Wilderness",
            "Wrestling",
        ],
    ),
    ("Technology", &[]),
    ("True Crime", &[]),
    (
        "TV & Film",
        &[
            "After Shows",
            "Film History",
            "Film Interviews",
            "Film Reviews",
            "TV Reviews",
        ],
    ),
];

static TAXONOMY: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| APPLE_CATEGORIES.iter().copied().collect());

/// True if `name` is one of the top-level Apple categories.
pub fn is_top_level_category(name: &str) -> bool {
    TAXONOMY.contains_key(name)
}

/// Allowed sub-categories for a top-level category, if it exists.
pub fn subcategories_of(category: &str) -> Option<&'static [&'static str]> {
    TAXONOMY.get(category).copied()
}

/// Checks a category/sub-category pair against the taxonomy.
/// `None` for the sub-category only checks the top level.
pub fn is_valid_category(category: &str, subcategory: Option<&str>) -> bool {
    match (subcategories_of(category), subcategory) {
        (Some(_), None) => true,
        (Some(subs), Some(sub)) => subs.contains(&sub),
        (None, _) => false,
    }
}

/// Groups a flat list of names into top-level categories and the names that
/// follow each of them.
///
/// Every known top-level name opens a group; any other string is appended to
/// the group that is currently open. Strings seen before the first top-level
/// name are dropped. A top-level name that repeats reopens its earlier group.
pub fn parse_categories<S: AsRef<str>>(flat: &[S]) -> BTreeMap<String, Vec<String>> {
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<&str> = None;

    for entry in flat {
        let name = entry.as_ref();
        if is_top_level_category(name) {
            out.entry(name.to_string()).or_default();
            current = Some(name);
        } else if let Some(key) = current {
            if let Some(group) = out.get_mut(key) {
                group.push(name.to_string());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_categories_groups() {
        let out = parse_categories(&[
            "Arts",
            "Books",
            "Religion & Spirituality",
            "Christianity",
            "Buddhism",
            "Sports",
        ]);

        let mut expected = BTreeMap::new();
        expected.insert("Arts".to_string(), vec!["Books".to_string()]);
        expected.insert(
            "Religion & Spirituality".to_string(),
            vec!["Christianity".to_string(), "Buddhism".to_string()],
        );
        expected.insert("Sports".to_string(), Vec::new());

        assert_eq!(out, expected);
    }

    #[test]
    fn test_parse_categories_drops_leading_orphans() {
        let out = parse_categories(&["Books", "Comedy", "Improv"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out["Comedy"], vec!["Improv".to_string()]);
    }

    #[test]
    fn test_parse_categories_repeated_top_level_reopens_group() {
        let out = parse_categories(&["Arts", "Books", "Comedy", "Arts", "Food"]);
        assert_eq!(out["Arts"], vec!["Books".to_string(), "Food".to_string()]);
        assert!(out["Comedy"].is_empty());
    }

    #[test]
    fn test_parse_categories_empty_input() {
        let empty: [&str; 0] = [];
        assert!(parse_categories(&empty).is_empty());
    }

    #[test]
    fn test_taxonomy_lookups() {
        assert!(is_top_level_category("True Crime"));
        assert!(!is_top_level_category("Books"));
        assert!(is_valid_category("Arts", Some("Books")));
        assert!(is_valid_category("Technology", None));
        assert!(!is_valid_category("Arts", Some("Golf")));
        assert!(!is_valid_category("Nope", None));
        assert_eq!(subcategories_of("Comedy").map(|s| s.len()), Some(3));
    }
}
