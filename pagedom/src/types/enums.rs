#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Whether an element takes part in layout, rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub const fn is_visible(self) -> bool {
        matches!(self, Display::Block)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Combine with a child's style. Attributes are inherited, never cleared.
    pub const fn merge(self, child: TextStyle) -> Self {
        Self {
            bold: self.bold || child.bold,
            underline: self.underline || child.underline,
            dim: self.dim || child.dim,
        }
    }
}
