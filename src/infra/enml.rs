//! Plain-text rendering of ENML note content for terminal display.

use super::depth::{MAX_DEPTH, exceeds_depth};
use super::enex::dtd_options;
use roxmltree::{Document, Node, NodeType};

/// Elements that end a line of text.
const BLOCK_ELEMENTS: &[&str] = &[
    "div", "p", "br", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "hr",
];

/// Renders note markup as plain text.
///
/// Block elements become line breaks, checkboxes become `[ ]` / `[x]`, and
/// runs of blank lines are collapsed. Content that is not well-formed markup
/// (or plain text), or that nests deeper than [`MAX_DEPTH`], is returned
/// unchanged.
pub fn to_plain_text(content: &str) -> String {
    let markup = content.trim();
    if exceeds_depth(markup, MAX_DEPTH) {
        return content.to_string();
    }
    let Ok(doc) = Document::parse_with_options(markup, dtd_options()) else {
        return content.to_string();
    };

    let mut out = String::new();
    render(doc.root_element(), &mut out);
    collapse_blank_lines(&out)
}

enum Visit<'a, 'input> {
    Open(Node<'a, 'input>),
    Close(Node<'a, 'input>),
}

fn render(root: Node<'_, '_>, out: &mut String) {
    let mut stack = vec![Visit::Open(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Open(node) => match node.node_type() {
                NodeType::Text => {
                    if let Some(text) = node.text() {
                        out.push_str(text);
                    }
                }
                NodeType::Element => {
                    if node.tag_name().name() == "en-todo" {
                        let checked = node.attribute("checked") == Some("true");
                        out.push_str(if checked { "[x] " } else { "[ ] " });
                    }
                    stack.push(Visit::Close(node));
                    stack.extend(node.children().rev().map(Visit::Open));
                }
                _ => {}
            },
            Visit::Close(node) => {
                if BLOCK_ELEMENTS.contains(&node.tag_name().name()) {
                    out.push('\n');
                }
            }
        }
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(if line.trim().is_empty() { "" } else { line });
    }
    lines.join("\n").trim().to_string()
}
