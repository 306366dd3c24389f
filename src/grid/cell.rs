use std::fmt;

/// Tag toggled by the bold shortcut
pub const BOLD: &str = "font-extrabold";
/// Tag toggled by the underline shortcut
pub const UNDERLINE: &str = "underline";
/// Tag toggled by the italic shortcut
pub const ITALIC: &str = "italic";

/// Opaque presentation tag attached to a cell.
/// The grid never interprets these; the theme maps them to terminal attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleTag(String);

impl StyleTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single grid cell: its text and the style tags applied to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    /// Insertion-ordered, never holds the same tag twice
    pub styles: Vec<StyleTag>,
}

impl Cell {
    pub fn has_style(&self, tag: &str) -> bool {
        self.styles.iter().any(|t| t.as_str() == tag)
    }

    /// The style list with `tag` removed if present, appended otherwise
    pub fn toggled_styles(&self, tag: &str) -> Vec<StyleTag> {
        if self.has_style(tag) {
            self.styles.iter().filter(|t| t.as_str() != tag).cloned().collect()
        } else {
            let mut styles = self.styles.clone();
            styles.push(StyleTag::from(tag));
            styles
        }
    }
}
