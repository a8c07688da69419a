//! Element nesting check run before handing markup to the XML parser.
//!
//! roxmltree descends one stack frame per nesting level, so a well-formed
//! document nested deeply enough exhausts the stack. The scan here is a
//! flat pass over the text that only tracks tag nesting; comments, CDATA
//! sections, processing instructions and declarations are skipped.

/// Deepest element nesting accepted in an export document or in note markup.
pub const MAX_DEPTH: usize = 256;

/// Returns true when elements in `text` nest deeper than `limit`.
///
/// Stops at the first element past the limit. Unterminated constructs end the
/// scan; the parser reports those. Every start tag inside a DTD internal subset
/// counts as one extra level, since entity expansion can stack them at any
/// reference.
pub(crate) fn exceeds_depth(text: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut entity_depth = 0usize;
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        rest = &rest[start..];

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = skip_past(after, "-->");
        } else if let Some(after) = rest.strip_prefix("<![CDATA[") {
            rest = skip_past(after, "]]>");
        } else if let Some(after) = rest.strip_prefix("<?") {
            rest = skip_past(after, "?>");
        } else if let Some(after) = rest.strip_prefix("<!") {
            let (remaining, tags) = skip_declaration(after);
            entity_depth += tags;
            if entity_depth > limit {
                return true;
            }
            rest = remaining;
        } else if let Some(after) = rest.strip_prefix("</") {
            depth = depth.saturating_sub(1);
            rest = skip_past(after, ">");
        } else {
            let after = &rest[1..];
            let (len, self_closing) = scan_start_tag(after);
            if !self_closing {
                depth += 1;
                if depth + entity_depth > limit {
                    return true;
                }
            }
            rest = &after[len..];
        }
    }

    false
}

fn skip_past<'a>(text: &'a str, terminator: &str) -> &'a str {
    text.find(terminator)
        .map_or("", |at| &text[at + terminator.len()..])
}

/// Skips a `<!DOCTYPE ...>` style declaration, including an internal subset.
///
/// Also returns the number of start tags found in quoted literals.
fn skip_declaration(text: &str) -> (&str, usize) {
    let bytes = text.as_bytes();
    let mut brackets = 0usize;
    let mut quote = None;
    let mut tags = 0usize;

    for (at, &byte) in bytes.iter().enumerate() {
        match (quote, byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), b'<') => {
                if !matches!(bytes.get(at + 1), Some(b'/' | b'!' | b'?')) {
                    tags += 1;
                }
            }
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'[') => brackets += 1,
            (None, b']') => brackets = brackets.saturating_sub(1),
            (None, b'>') if brackets == 0 => return (&text[at + 1..], tags),
            _ => {}
        }
    }
    ("", tags)
}

/// Length of a start tag body up to and including `>`, and whether it ends in `/>`.
fn scan_start_tag(text: &str) -> (usize, bool) {
    let mut quote = None;

    for (at, byte) in text.bytes().enumerate() {
        match (quote, byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'>') => return (at + 1, text[..at].ends_with('/')),
            _ => {}
        }
    }
    (text.len(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(name: &str, depth: usize) -> String {
        format!(
            "{}x{}",
            format!("<{name}>").repeat(depth),
            format!("</{name}>").repeat(depth)
        )
    }

    #[test]
    fn depth_at_limit_is_accepted() {
        assert!(!exceeds_depth(&nested("div", 4), 4));
    }

    #[test]
    fn depth_past_limit_is_rejected() {
        assert!(exceeds_depth(&nested("div", 5), 4));
    }

    #[test]
    fn siblings_do_not_add_depth() {
        let flat = "<a><b></b><b></b><b></b><b></b><b></b></a>";
        assert!(!exceeds_depth(flat, 2));
    }

    #[test]
    fn self_closing_tags_do_not_add_depth() {
        let doc = "<a><br/><en-todo checked=\"true\" /><br/></a>";
        assert!(!exceeds_depth(doc, 1));
    }

    #[test]
    fn cdata_and_comments_are_skipped() {
        let doc = format!(
            "<a><!-- <b><b><b> --><![CDATA[{}]]></a>",
            nested("div", 50)
        );
        assert!(!exceeds_depth(&doc, 1));
    }

    #[test]
    fn doctype_without_subset_adds_no_depth() {
        let doc = "<?xml version=\"1.0\"?>\
            <!DOCTYPE en-export SYSTEM \"http://xml.evernote.com/pub/evernote-export3.dtd\">\
            <a><b/></a>";
        assert!(!exceeds_depth(doc, 1));
    }

    #[test]
    fn entity_markup_counts_toward_depth() {
        let doc = "<!DOCTYPE a [ <!ENTITY e \"<b><b>x</b></b>\"> ]><a>&e;</a>";
        assert!(!exceeds_depth(doc, 3));
        assert!(exceeds_depth(doc, 2));
    }

    #[test]
    fn quoted_angle_brackets_in_attributes_are_ignored() {
        let doc = "<a title=\"x > y/\"><b/></a>";
        assert!(!exceeds_depth(doc, 1));
    }

    #[test]
    fn unterminated_input_ends_scan() {
        assert!(!exceeds_depth("<a><b", 5));
        assert!(!exceeds_depth("<a><!-- never closed <b><b>", 1));
    }
}
