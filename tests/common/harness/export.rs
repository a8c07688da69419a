//! Builders for ENEX export documents with sensible defaults.

#![allow(dead_code)]

/// Builder for a single note inside a test export.
///
/// Every field is optional so tests can exercise the parser's defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: Option<String>,
    author: Option<String>,
    created: Option<String>,
    updated: Option<String>,
    tags: Vec<String>,
    body: String,
}

impl TestNote {
    /// Creates a note with the given title and fixed dates.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: None,
            created: Some("20240101T000000Z".to_string()),
            updated: Some("20240101T000000Z".to_string()),
            tags: Vec::new(),
            body: String::new(),
        }
    }

    /// Creates a note with no fields at all.
    pub fn bare() -> Self {
        Self {
            title: None,
            author: None,
            created: None,
            updated: None,
            tags: Vec::new(),
            body: String::new(),
        }
    }

    /// Sets the author (written under `note-attributes`).
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the raw created date.
    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Sets the raw updated date.
    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the body text; it is wrapped in one `div` per line.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("  <note>\n");

        if let Some(title) = &self.title {
            xml.push_str(&format!("    <title>{}</title>\n", escape(title)));
        }

        let divs: String = self
            .body
            .lines()
            .map(|line| format!("<div>{}</div>", escape(line)))
            .collect();
        xml.push_str(&format!(
            "    <content><![CDATA[<?xml version=\"1.0\" encoding=\"UTF-8\"?><en-note>{}</en-note>]]></content>\n",
            divs
        ));

        if let Some(created) = &self.created {
            xml.push_str(&format!("    <created>{}</created>\n", escape(created)));
        }
        if let Some(updated) = &self.updated {
            xml.push_str(&format!("    <updated>{}</updated>\n", escape(updated)));
        }
        for tag in &self.tags {
            xml.push_str(&format!("    <tag>{}</tag>\n", escape(tag)));
        }
        if let Some(author) = &self.author {
            xml.push_str(&format!(
                "    <note-attributes>\n      <author>{}</author>\n    </note-attributes>\n",
                escape(author)
            ));
        }

        xml.push_str("  </note>\n");
        xml
    }
}

/// Builder for a whole export document.
#[derive(Debug, Clone, Default)]
pub struct TestExport {
    notes: Vec<TestNote>,
}

impl TestExport {
    /// Creates an export with no notes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note to the export.
    pub fn note(mut self, note: TestNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Renders the export as ENEX XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE en-export SYSTEM \"http://xml.evernote.com/pub/evernote-export3.dtd\">\n\
             <en-export application=\"Evernote\" version=\"10\">\n",
        );
        for note in &self.notes {
            xml.push_str(&note.to_xml());
        }
        xml.push_str("</en-export>\n");
        xml
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
