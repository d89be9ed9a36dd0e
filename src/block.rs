//! Raw source blocks handed to the pipeline.
//!
//! A [`RawBlock`] is whatever the page supplier captured: a text dump of the
//! rendered page, or a fragment of its markup. The structural strategies only
//! look at markup blocks; every block contributes lines to the line scan.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};
use serde::{Deserialize, Serialize};

/// A closing tag or a void element. Opening tags alone are too easy to hit
/// in prose (`<b and c>`).
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</[a-z][a-z0-9-]*\s*>|<(?:br|hr|img|input|meta|link)\b[^<>]*/?>")
        .expect("valid tag regex")
});

/// Elements that start a new visible line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "html", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

/// One unit of source text plus its position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Position of the block in the input sequence.
    pub index: usize,
    /// Captured text, plain or markup.
    pub text: String,
}

impl RawBlock {
    /// Create a block at `index`.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Number a sequence of texts in order.
    pub fn sequence<I, S>(texts: I) -> Vec<RawBlock>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| RawBlock::new(index, text))
            .collect()
    }

    /// Whether the block holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the block looks like an HTML fragment rather than plain text.
    pub fn is_markup(&self) -> bool {
        MARKUP_TAG.is_match(&self.text)
    }

    /// Parse the block as an HTML fragment.
    pub(crate) fn fragment(&self) -> Html {
        Html::parse_fragment(&self.text)
    }

    /// Trimmed, non-empty lines of the block's visible text.
    ///
    /// Plain text is split on line breaks. Markup is rendered the way a
    /// browser lays it out: block elements start new lines and inline text
    /// is joined, so `<p>Harvard <em>University</em></p>` stays one line.
    pub fn lines(&self) -> Vec<String> {
        if self.is_markup() {
            rendered_lines(self.fragment().root_element())
        } else {
            split_lines(&self.text)
        }
    }
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Visible lines under an element, one or more per text node.
pub(crate) fn element_lines(element: ElementRef) -> Vec<String> {
    element.text().flat_map(split_lines).collect()
}

/// Visible lines under an element, with inline runs joined by spaces.
pub(crate) fn rendered_lines(element: ElementRef) -> Vec<String> {
    let mut out = String::new();
    render_into(element, &mut out);
    split_lines(&out)
        .into_iter()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

fn render_into(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let sep = if BLOCK_ELEMENTS.contains(&el.name()) {
                    '\n'
                } else {
                    ' '
                };
                out.push(sep);
                render_into(child, out);
                out.push(sep);
            }
            _ => {}
        }
    }
}

/// Visible text under an element with text nodes joined by line breaks.
pub(crate) fn element_text(element: ElementRef) -> String {
    element_lines(element).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_lines_are_trimmed_and_nonempty() {
        let block = RawBlock::new(0, "  Harvard University \n\n  #1\n");
        assert!(!block.is_markup());
        assert_eq!(block.lines(), vec!["Harvard University", "#1"]);
    }

    #[test]
    fn markup_lines_come_from_text_nodes() {
        let block = RawBlock::new(
            3,
            r#"<li class="item-list"><h3><a href="/u/1">Harvard University</a></h3>
               <p>Cambridge, MA</p><span>#1</span></li>"#,
        );
        assert!(block.is_markup());
        assert_eq!(
            block.lines(),
            vec!["Harvard University", "Cambridge, MA", "#1"]
        );
    }

    #[test]
    fn angle_brackets_in_prose_are_not_markup() {
        let block = RawBlock::new(0, "score < 50 and rank > 10");
        assert!(!block.is_markup());

        let block = RawBlock::new(0, "Note <b and c> here");
        assert!(!block.is_markup());
        assert_eq!(block.lines(), vec!["Note <b and c> here"]);

        assert!(RawBlock::new(0, "line one<br>line two").is_markup());
        assert!(RawBlock::new(0, "<p>Harvard University</p>").is_markup());
    }

    #[test]
    fn inline_markup_stays_on_one_line() {
        let block = RawBlock::new(
            0,
            "<div><p>Harvard <em>University</em></p><p>Massachusetts | United States</p><p>#1</p></div>",
        );
        assert_eq!(
            block.lines(),
            vec!["Harvard University", "Massachusetts | United States", "#1"]
        );
    }

    #[test]
    fn line_breaks_split_inline_runs() {
        let block = RawBlock::new(0, "<span>Zurich</span><br><span>#7</span>");
        assert_eq!(block.lines(), vec!["Zurich", "#7"]);
    }

    #[test]
    fn sequence_numbers_blocks() {
        let blocks = RawBlock::sequence(["a", "b"]);
        assert_eq!(blocks[1], RawBlock::new(1, "b"));
        assert!(RawBlock::new(2, " \n\t").is_blank());
    }
}
