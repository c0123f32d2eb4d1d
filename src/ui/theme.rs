use crossterm::style::{Color, Stylize};

/// Design tokens for the picktest CLI.
///
/// Icons, tree connectors and colors are all sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const SELECTED: &str = "●";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const SELECTED: &str = "[x]";
}

/// Tree connectors, each four columns wide
pub mod branches {
    pub const TEE: &str = "├── ";
    pub const ELBOW: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const BLANK: &str = "    ";
}

pub mod branches_ascii {
    pub const TEE: &str = "|-- ";
    pub const ELBOW: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const BLANK: &str = "    ";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> Color {
        match self {
            SemanticColor::Success => colors::SUCCESS,
            SemanticColor::Error => colors::ERROR,
            SemanticColor::Warning => colors::WARNING,
            SemanticColor::Info => colors::INFO,
            SemanticColor::Dim => colors::DIM,
        }
    }
}

/// Color `text` when colors are enabled
pub fn paint(text: &str, color: SemanticColor, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color.color()))
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Selected,
}

impl Icon {
    pub fn render(&self, unicode: bool) -> &'static str {
        match (unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Pending) => icons::PENDING,
            (true, Icon::Selected) => icons::SELECTED,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Pending) => icons_ascii::PENDING,
            (false, Icon::Selected) => icons_ascii::SELECTED,
        }
    }

    pub fn colored(&self, color: bool, unicode: bool) -> String {
        let semantic = match self {
            Icon::Success | Icon::Selected => SemanticColor::Success,
            Icon::Error => SemanticColor::Error,
            Icon::Warning => SemanticColor::Warning,
            Icon::Pending => SemanticColor::Dim,
        };
        paint(self.render(unicode), semantic, color)
    }
}

/// Connector strings for one rendering mode
#[derive(Debug, Clone, Copy)]
pub struct Branches {
    pub tee: &'static str,
    pub elbow: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Branches {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                tee: branches::TEE,
                elbow: branches::ELBOW,
                pipe: branches::PIPE,
                blank: branches::BLANK,
            }
        } else {
            Self {
                tee: branches_ascii::TEE,
                elbow: branches_ascii::ELBOW,
                pipe: branches_ascii::PIPE,
                blank: branches_ascii::BLANK,
            }
        }
    }
}
