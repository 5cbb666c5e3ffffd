//! Markup writer: the tag-printing sink presentation rendering emits through.

/// Writes nested presentation markup with stack-tracked open tags.
///
/// The renderer supplies tag names and raw attribute values; all escaping
/// happens here. Output is compact, without indentation. Closes are LIFO:
/// [`MarkupWriter::close_element`] always closes the most recently opened
/// tag, so emitted markup can never interleave or dangle.
#[derive(Debug, Default)]
pub struct MarkupWriter {
    out: String,
    open: Vec<String>,
}

impl MarkupWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `<tag>` with no attributes and pushes it on the open stack.
    pub fn open_element(&mut self, tag: &str) {
        self.open_element_with_attrs(tag, &[]);
    }

    /// Opens `<tag attr="value" ...>` and pushes it on the open stack.
    pub fn open_element_with_attrs(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        self.push_attrs(attrs);
        self.out.push('>');
        self.open.push(tag.to_string());
    }

    /// Emits a self-closing `<tag attr="value" ... />`.
    pub fn print_element(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        self.push_attrs(attrs);
        self.out.push_str(" />");
    }

    /// Closes the most recently opened tag.
    ///
    /// Calling with nothing open is a caller bug; it is logged and ignored
    /// rather than panicking.
    pub fn close_element(&mut self) {
        match self.open.pop() {
            Some(tag) => {
                self.out.push_str("</");
                self.out.push_str(&tag);
                self.out.push('>');
            }
            None => log::warn!("close_element called with no open element"),
        }
    }

    /// Emits text content, escaping `<`, `>`, and `&`.
    pub fn text(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                '&' => self.out.push_str("&amp;"),
                _ => self.out.push(c),
            }
        }
    }

    /// Number of currently open tags.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Consumes the writer, closing any still-open tags in LIFO order, and
    /// returns the accumulated markup.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close_element();
        }
        self.out
    }

    fn push_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.push_attr_value(value);
            self.out.push('"');
        }
    }

    /// Escapes `<`, `>`, `&`, `"`, and `'` for safe attribute emission.
    fn push_attr_value(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                '&' => self.out.push_str("&amp;"),
                '"' => self.out.push_str("&quot;"),
                '\'' => self.out.push_str("&#39;"),
                _ => self.out.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_open_close() {
        let mut out = MarkupWriter::new();
        out.open_element_with_attrs("div", &[("class", "checkbox-group")]);
        out.open_element("label");
        out.text("hi");
        out.close_element();
        out.close_element();
        assert_eq!(
            out.finish(),
            "<div class=\"checkbox-group\"><label>hi</label></div>"
        );
    }

    #[test]
    fn test_self_closing_element() {
        let mut out = MarkupWriter::new();
        out.print_element("input", &[("type", "checkbox"), ("name", "agree")]);
        assert_eq!(out.finish(), "<input type=\"checkbox\" name=\"agree\" />");
    }

    #[test]
    fn test_text_escaping() {
        let mut out = MarkupWriter::new();
        out.text("a < b & c > d");
        assert_eq!(out.finish(), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_attr_value_escaping() {
        let mut out = MarkupWriter::new();
        out.print_element("input", &[("name", "a\"b'c&d<e")]);
        assert_eq!(
            out.finish(),
            "<input name=\"a&quot;b&#39;c&amp;d&lt;e\" />"
        );
    }

    #[test]
    fn test_finish_auto_closes_in_lifo_order() {
        let mut out = MarkupWriter::new();
        out.open_element("div");
        out.open_element("label");
        assert_eq!(out.depth(), 2);
        assert_eq!(out.finish(), "<div><label></label></div>");
    }

    #[test]
    fn test_close_with_nothing_open_is_ignored() {
        let mut out = MarkupWriter::new();
        out.close_element();
        out.text("still usable");
        assert_eq!(out.finish(), "still usable");
    }
}
