// ABOUTME: Output options for the XML encoder.
// ABOUTME: EncodeOptions controls indentation and the leading XML declaration.

/// Settings applied by `Podcast::encode_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level; 0 writes the document on one line.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Write everything on a single line.
    pub fn compact(self) -> Self {
        self.indent(0)
    }

    /// Enable or disable the XML declaration.
    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.indent, 2);
        assert!(opts.xml_declaration);
    }

    #[test]
    fn test_fluent_setters() {
        let opts = EncodeOptions::new().compact().xml_declaration(false);
        assert_eq!(opts.indent, 0);
        assert!(!opts.xml_declaration);
        assert_eq!(EncodeOptions::new().indent(4).indent, 4);
    }
}
