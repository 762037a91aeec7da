//! Line markup shared by the renderers and the detail pane.
//!
//! Renderers produce plain strings; the detail pane styles them line by line:
//!
//! | Prefix   | Meaning                     |
//! |----------|-----------------------------|
//! | `# `     | entity heading              |
//! | `## `    | block subheading            |
//! | `---`    | horizontal divider          |
//! | anything | paragraph text              |

/// One parsed markup line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Heading(&'a str),
    Subheading(&'a str),
    Divider,
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a single line of renderer output.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::render::markup::Line;
    ///
    /// assert_eq!(Line::parse("# Fireball"), Line::Heading("Fireball"));
    /// assert_eq!(Line::parse("## Actions"), Line::Subheading("Actions"));
    /// assert_eq!(Line::parse("#hashtag"), Line::Text("#hashtag"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix("## ") {
            Self::Subheading(rest.trim())
        } else if let Some(rest) = line.strip_prefix("# ") {
            Self::Heading(rest.trim())
        } else if line.trim() == "---" {
            Self::Divider
        } else {
            Self::Text(line)
        }
    }
}

/// Splits renderer output into classified lines.
#[must_use]
pub fn parse(text: &str) -> Vec<Line<'_>> {
    text.lines().map(Line::parse).collect()
}

/// Builder used by the renderers to emit markup.
///
/// Blank lines are collapsed so that optional sections which end up empty do
/// not leave gaps behind.
#[derive(Debug, Default)]
pub struct Markup {
    out: String,
}

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: &str) -> &mut Self {
        self.blank();
        self.push_line(&format!("# {text}"))
    }

    pub fn subheading(&mut self, text: &str) -> &mut Self {
        self.blank();
        self.push_line(&format!("## {text}"))
    }

    pub fn divider(&mut self) -> &mut Self {
        self.blank();
        self.push_line("---")
    }

    /// Appends one line of text. Empty input is ignored.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if text.trim().is_empty() {
            return self;
        }
        self.push_line(text)
    }

    /// Appends `label: value` when the value is present.
    pub fn field(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.push_line(&format!("{label}: {value}")),
            None => self,
        }
    }

    /// Appends paragraphs separated by blank lines.
    pub fn paragraphs<S: AsRef<str>>(&mut self, paragraphs: &[S]) -> &mut Self {
        for paragraph in paragraphs {
            let paragraph = paragraph.as_ref().trim();
            if paragraph.is_empty() {
                continue;
            }
            self.blank();
            for line in paragraph.lines() {
                self.push_line(line);
            }
        }
        self
    }

    /// Ends the current paragraph.
    pub fn blank(&mut self) -> &mut Self {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn push_line(&mut self, line: &str) -> &mut Self {
        self.out.push_str(line);
        self.out.push('\n');
        self
    }
}
