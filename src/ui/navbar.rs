use ratatui::{layout::Rect, text::Line, widgets::Tabs, Frame};

use crate::ui::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub id: usize,
    pub name: String,
}

/// Tab strip of sheets. Only one sheet exists and the strip is display-only.
#[derive(Debug, Clone)]
pub struct Navbar {
    pub sheets: Vec<Sheet>,
    /// Id of the active sheet
    pub active: usize,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            sheets: vec![Sheet { id: 0, name: "main".to_string() }],
            active: 0,
        }
    }
}

impl Navbar {
    fn active_index(&self) -> Option<usize> {
        self.sheets.iter().position(|s| s.id == self.active)
    }

    pub fn active_name(&self) -> &str {
        self.active_index()
            .map(|i| self.sheets[i].name.as_str())
            .unwrap_or("")
    }

    pub fn render(&self, frame: &mut Frame, style: &Style, area: Rect) {
        let titles: Vec<Line> = self.sheets.iter().map(|s| Line::from(s.name.clone())).collect();
        let tabs = Tabs::new(titles)
            .select(self.active_index().unwrap_or(0))
            .style(style.navbar())
            .highlight_style(style.navbar_active())
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
