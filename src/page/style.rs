//! Declarative text styling.
//!
//! Content is described as a tree of [`Inline`] runs inside [`TextBlock`]s;
//! display surfaces decide how each role, alignment and run is realised.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Semantic weight of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextRole {
    /// Large bold page title.
    Title,
    /// Section heading.
    Heading,
    #[default]
    Body,
    /// Small text under charts and images.
    Caption,
}

/// Inline content run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Bold { content: Vec<Inline>, font_rem: f64 },
    Italic(Vec<Inline>),
    /// Muted gray text.
    Quiet { content: Vec<Inline>, font_rem: f64 },
    Link { content: Vec<Inline>, href: String },
    Subscript(String),
    LineBreak,
}

impl Inline {
    /// Concatenated visible text, without markup.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    fn collect_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::Subscript(text) => out.push_str(text),
            Self::Bold { content, .. }
            | Self::Italic(content)
            | Self::Quiet { content, .. }
            | Self::Link { content, .. } => {
                for child in content {
                    child.collect_plain_text(out);
                }
            }
            Self::LineBreak => out.push('\n'),
        }
    }
}

#[must_use]
pub fn text(value: impl Into<String>) -> Inline {
    Inline::Text(value.into())
}

#[must_use]
pub fn bold(value: impl Into<String>) -> Inline {
    bold_sized(value, 1.0)
}

#[must_use]
pub fn bold_sized(value: impl Into<String>, font_rem: f64) -> Inline {
    Inline::Bold {
        content: vec![text(value)],
        font_rem,
    }
}

#[must_use]
pub fn italic(content: Vec<Inline>) -> Inline {
    Inline::Italic(content)
}

#[must_use]
pub fn quiet(value: impl Into<String>, font_rem: f64) -> Inline {
    quiet_runs(vec![text(value)], font_rem)
}

#[must_use]
pub fn quiet_runs(content: Vec<Inline>, font_rem: f64) -> Inline {
    Inline::Quiet { content, font_rem }
}

#[must_use]
pub fn link(label: impl Into<String>, href: impl Into<String>) -> Inline {
    link_runs(vec![text(label)], href)
}

#[must_use]
pub fn link_runs(content: Vec<Inline>, href: impl Into<String>) -> Inline {
    Inline::Link {
        content,
        href: href.into(),
    }
}

#[must_use]
pub fn subscript(value: impl Into<String>) -> Inline {
    Inline::Subscript(value.into())
}

/// Paragraph-level block of inline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub role: TextRole,
    pub align: Align,
    pub content: Vec<Inline>,
}

impl TextBlock {
    #[must_use]
    pub fn new(role: TextRole, content: Vec<Inline>) -> Self {
        Self {
            role,
            align: Align::Left,
            content,
        }
    }

    #[must_use]
    pub fn body(content: Vec<Inline>) -> Self {
        Self::new(TextRole::Body, content)
    }

    #[must_use]
    pub fn centered_title(content: Vec<Inline>) -> Self {
        Self::new(TextRole::Title, content).aligned(Align::Center)
    }

    #[must_use]
    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content.iter().map(Inline::plain_text).collect()
    }
}
