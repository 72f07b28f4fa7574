//! Incremental HTML output

use std::borrow::Cow;

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Make JSON safe to embed inside a `<script>` element.
pub fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Build an HTML document line by line.
pub struct HtmlWriter {
    prefix: String,
    pretty_print: bool,
    indent: usize,
    lines: Vec<String>,
}

impl HtmlWriter {
    pub fn new(class_prefix: Option<&str>, pretty_print: bool) -> Self {
        Self {
            prefix: class_prefix.unwrap_or_default().to_string(),
            pretty_print,
            indent: 0,
            lines: vec![],
        }
    }

    /// Prefixed CSS class name.
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Space-separated list of prefixed class names.
    pub fn classes(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|n| self.class(n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent_str(&self) -> String {
        if self.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn tag(name: &str, attrs: &[(&str, &str)]) -> String {
        let mut tag = format!("<{}", name);
        for (key, value) in attrs {
            if value.is_empty() && is_boolean_attr(key) {
                tag.push_str(&format!(" {}", key));
            } else {
                tag.push_str(&format!(" {}=\"{}\"", key, escape(value)));
            }
        }
        tag.push('>');
        tag
    }

    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let line = format!("{}{}", self.indent_str(), Self::tag(name, attrs));
        self.lines.push(line);
        self.indent += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.indent = self.indent.saturating_sub(1);
        let line = format!("{}</{}>", self.indent_str(), name);
        self.lines.push(line);
    }

    /// Element without content, e.g. `<input>` or `<meta>`.
    pub fn void(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let line = format!("{}{}", self.indent_str(), Self::tag(name, attrs));
        self.lines.push(line);
    }

    /// Element with escaped text content on a single line.
    pub fn text(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        let line = format!(
            "{}{}{}</{}>",
            self.indent_str(),
            Self::tag(name, attrs),
            escape(text),
            name
        );
        self.lines.push(line);
    }

    /// Pre-formed markup, written as-is.
    pub fn raw(&mut self, markup: &str) {
        let line = format!("{}{}", self.indent_str(), markup);
        self.lines.push(line);
    }

    pub fn finish(self) -> String {
        let sep = if self.pretty_print { "\n" } else { "" };
        let mut out = self.lines.join(sep);
        out.push_str(sep);
        out
    }
}

fn is_boolean_attr(key: &str) -> bool {
    matches!(
        key,
        "hidden" | "required" | "checked" | "open" | "disabled" | "selected"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_script_json() {
        assert_eq!(escape_script_json(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }

    #[test]
    fn test_nesting_and_indent() {
        let mut w = HtmlWriter::new(Some("pf-"), true);
        let class = w.class("card");
        w.open("div", &[("class", class.as_str())]);
        w.text("h3", &[], "Title & more");
        w.void("input", &[("name", "email"), ("required", "")]);
        w.close("div");
        assert_eq!(
            w.finish(),
            "<div class=\"pf-card\">\n  <h3>Title &amp; more</h3>\n  <input name=\"email\" required>\n</div>\n"
        );
    }

    #[test]
    fn test_compact_output() {
        let mut w = HtmlWriter::new(None, false);
        w.open("p", &[]);
        w.raw("<br>");
        w.close("p");
        assert_eq!(w.finish(), "<p><br></p>");
    }

    #[test]
    fn test_classes_prefixed() {
        let w = HtmlWriter::new(Some("x-"), true);
        assert_eq!(w.classes(&["badge", "skill"]), "x-badge x-skill");
    }
}
