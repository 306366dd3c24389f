pub mod idle;
pub mod insert;

/// Whether the active cell is accepting text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys navigate, select and toggle styles
    #[default]
    Idle,
    /// Keys go to the inline editor of the active cell
    Editing,
}

impl Mode {
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Idle => "READY",
            Mode::Editing => "EDIT",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing)
    }
}
