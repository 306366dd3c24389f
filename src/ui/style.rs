use std::collections::HashMap;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style as RatStyle};
use serde::{Deserialize, Serialize};

use crate::grid::cell::{StyleTag, BOLD, ITALIC, UNDERLINE};
use crate::mode::Mode;

/// Color that can be serialized/deserialized
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// Named color: "red", "blue", "cyan", etc.
    Named(NamedColor),
    /// RGB color: [255, 128, 0]
    Rgb([u8; 3]),
    /// 256-color index: 42
    Indexed(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Reset,
}

impl From<NamedColor> for Color {
    fn from(n: NamedColor) -> Color {
        match n {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::Gray => Color::Gray,
            NamedColor::DarkGray => Color::DarkGray,
            NamedColor::LightRed => Color::LightRed,
            NamedColor::LightGreen => Color::LightGreen,
            NamedColor::LightYellow => Color::LightYellow,
            NamedColor::LightBlue => Color::LightBlue,
            NamedColor::LightMagenta => Color::LightMagenta,
            NamedColor::LightCyan => Color::LightCyan,
            NamedColor::White => Color::White,
            NamedColor::Reset => Color::Reset,
        }
    }
}

impl From<ThemeColor> for Color {
    fn from(tc: ThemeColor) -> Color {
        match tc {
            ThemeColor::Named(n) => n.into(),
            ThemeColor::Rgb([r, g, b]) => Color::Rgb(r, g, b),
            ThemeColor::Indexed(i) => Color::Indexed(i),
        }
    }
}

/// Style definition for a single element, also used for style tags
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<ThemeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<ThemeColor>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub dim: bool,
}

impl ElementStyle {
    pub fn fg(color: ThemeColor) -> Self {
        Self { fg: Some(color), ..Default::default() }
    }

    pub fn with_bg(mut self, color: ThemeColor) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn to_ratatui(&self) -> RatStyle {
        let mut style = RatStyle::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg.into());
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg.into());
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

/// Built-in mapping for the tags the style shortcuts toggle
pub fn default_tag_styles() -> HashMap<String, ElementStyle> {
    HashMap::from([
        (BOLD.to_string(), ElementStyle::default().with_bold()),
        (UNDERLINE.to_string(), ElementStyle::default().with_underline()),
        (ITALIC.to_string(), ElementStyle::default().with_italic()),
    ])
}

/// Complete theme configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background color for the entire UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ThemeColor>,

    // Grid cells
    pub cell: ElementStyle,
    pub cell_active: ElementStyle,
    pub cell_selection: ElementStyle,
    pub cell_editing: ElementStyle,

    // Column labels and row numbers
    pub header_col: ElementStyle,
    pub header_col_active: ElementStyle,
    pub row_number: ElementStyle,
    pub row_number_active: ElementStyle,

    // Status bar
    pub status_bar: ElementStyle,
    pub status_mode_idle: ElementStyle,
    pub status_mode_editing: ElementStyle,

    // Sheet tabs
    pub navbar: ElementStyle,
    pub navbar_active: ElementStyle,

    pub message: ElementStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme with black background (default)
    pub fn dark() -> Self {
        use NamedColor::*;
        Self {
            name: "dark".to_string(),
            background: Some(ThemeColor::Named(Black)),
            cell: ElementStyle::fg(ThemeColor::Named(White)),
            cell_active: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightBlue)),
            cell_selection: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(DarkGray)),
            cell_editing: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(White)),
            header_col: ElementStyle::fg(ThemeColor::Named(LightGreen)).with_bold(),
            header_col_active: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightGreen))
                .with_bold(),
            row_number: ElementStyle::fg(ThemeColor::Named(Gray)),
            row_number_active: ElementStyle::fg(ThemeColor::Named(LightYellow)).with_bold(),
            status_bar: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(DarkGray)),
            status_mode_idle: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightBlue))
                .with_bold(),
            status_mode_editing: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightGreen))
                .with_bold(),
            navbar: ElementStyle::fg(ThemeColor::Named(Gray)),
            navbar_active: ElementStyle::fg(ThemeColor::Named(White)).with_underline(),
            message: ElementStyle::fg(ThemeColor::Named(White)),
        }
    }

    pub fn light() -> Self {
        use NamedColor::*;
        Self {
            name: "light".to_string(),
            background: None, // Use terminal default
            cell: ElementStyle::fg(ThemeColor::Named(Black)),
            cell_active: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(Blue)),
            cell_selection: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightCyan)),
            cell_editing: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(LightYellow)),
            header_col: ElementStyle::fg(ThemeColor::Named(Blue)).with_bold(),
            header_col_active: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(Blue))
                .with_bold(),
            row_number: ElementStyle::fg(ThemeColor::Named(Gray)),
            row_number_active: ElementStyle::fg(ThemeColor::Named(Blue)).with_bold(),
            status_bar: ElementStyle::fg(ThemeColor::Named(Black))
                .with_bg(ThemeColor::Named(Gray)),
            status_mode_idle: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(Blue))
                .with_bold(),
            status_mode_editing: ElementStyle::fg(ThemeColor::Named(White))
                .with_bg(ThemeColor::Named(Green))
                .with_bold(),
            navbar: ElementStyle::fg(ThemeColor::Named(DarkGray)),
            navbar_active: ElementStyle::fg(ThemeColor::Named(Black)).with_underline(),
            message: ElementStyle::fg(ThemeColor::Named(Black)),
        }
    }

    pub fn solarized_dark() -> Self {
        // Solarized colors
        let base03 = ThemeColor::Rgb([0, 43, 54]);
        let base02 = ThemeColor::Rgb([7, 54, 66]);
        let base01 = ThemeColor::Rgb([88, 110, 117]);
        let base0 = ThemeColor::Rgb([131, 148, 150]);
        let base1 = ThemeColor::Rgb([147, 161, 161]);
        let yellow = ThemeColor::Rgb([181, 137, 0]);
        let blue = ThemeColor::Rgb([38, 139, 210]);
        let cyan = ThemeColor::Rgb([42, 161, 152]);
        let green = ThemeColor::Rgb([133, 153, 0]);

        Self {
            name: "solarized-dark".to_string(),
            background: Some(base03),
            cell: ElementStyle::fg(base0),
            cell_active: ElementStyle::fg(base03).with_bg(blue),
            cell_selection: ElementStyle::fg(base0).with_bg(base02),
            cell_editing: ElementStyle::fg(base03).with_bg(base1),
            header_col: ElementStyle::fg(cyan).with_bold(),
            header_col_active: ElementStyle::fg(base03).with_bg(cyan).with_bold(),
            row_number: ElementStyle::fg(base01),
            row_number_active: ElementStyle::fg(yellow).with_bold(),
            status_bar: ElementStyle::fg(base1).with_bg(base02),
            status_mode_idle: ElementStyle::fg(base03).with_bg(blue).with_bold(),
            status_mode_editing: ElementStyle::fg(base03).with_bg(green).with_bold(),
            navbar: ElementStyle::fg(base01),
            navbar_active: ElementStyle::fg(base1).with_underline(),
            message: ElementStyle::fg(base0),
        }
    }

    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file: {}", e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse theme file: {}", e))
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "solarized" | "solarized-dark" => Some(Self::solarized_dark()),
            _ => None,
        }
    }

    /// List available built-in themes
    pub fn builtin_names() -> &'static [&'static str] {
        &["dark", "light", "solarized-dark"]
    }
}

/// Runtime style manager: the theme plus the style-tag mapping
pub struct Style {
    pub theme: Theme,
    tags: HashMap<String, ElementStyle>,
}

impl Style {
    pub fn new() -> Self {
        Self::with_theme(Theme::default(), default_tag_styles())
    }

    pub fn with_theme(theme: Theme, tags: HashMap<String, ElementStyle>) -> Self {
        Self { theme, tags }
    }

    /// Base cell style with every mapped tag patched on top, in tag order.
    /// Tags without a mapping are skipped.
    pub fn cell_with_tags(&self, tags: &[StyleTag]) -> RatStyle {
        tags.iter()
            .filter_map(|tag| self.tags.get(tag.as_str()))
            .fold(self.cell(), |style, tag_style| style.patch(tag_style.to_ratatui()))
    }

    // Convenience accessors that return ratatui styles
    pub fn cell(&self) -> RatStyle {
        self.theme.cell.to_ratatui()
    }

    pub fn cell_active(&self) -> RatStyle {
        self.theme.cell_active.to_ratatui()
    }

    pub fn cell_selection(&self) -> RatStyle {
        self.theme.cell_selection.to_ratatui()
    }

    pub fn cell_editing(&self) -> RatStyle {
        self.theme.cell_editing.to_ratatui()
    }

    pub fn header_col(&self, active: bool) -> RatStyle {
        if active {
            self.theme.header_col_active.to_ratatui()
        } else {
            self.theme.header_col.to_ratatui()
        }
    }

    pub fn row_number(&self, active: bool) -> RatStyle {
        if active {
            self.theme.row_number_active.to_ratatui()
        } else {
            self.theme.row_number.to_ratatui()
        }
    }

    pub fn status_bar(&self) -> RatStyle {
        self.theme.status_bar.to_ratatui()
    }

    pub fn status_mode(&self, mode: Mode) -> RatStyle {
        match mode {
            Mode::Idle => self.theme.status_mode_idle.to_ratatui(),
            Mode::Editing => self.theme.status_mode_editing.to_ratatui(),
        }
    }

    pub fn navbar(&self) -> RatStyle {
        self.theme.navbar.to_ratatui()
    }

    pub fn navbar_active(&self) -> RatStyle {
        self.theme.navbar_active.to_ratatui()
    }

    pub fn message(&self) -> RatStyle {
        self.theme.message.to_ratatui()
    }

    pub fn background(&self) -> Option<Color> {
        self.theme.background.map(|c| c.into())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}
