use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    Plain,
    Title,
    Info,
    Success,
    Warning,
    Error,
}

impl StyleHint {
    pub fn prefix(&self) -> Option<ColoredString> {
        match self {
            StyleHint::Plain | StyleHint::Title => None,
            StyleHint::Info => Some("ℹ".blue()),
            StyleHint::Success => Some("✓".green()),
            StyleHint::Warning => Some("⚠".yellow()),
            StyleHint::Error => Some("✗".red()),
        }
    }

    pub fn render(&self, text: &str) -> String {
        match (self, self.prefix()) {
            (StyleHint::Title, _) => text.bold().cyan().to_string(),
            (_, Some(prefix)) => format!("{} {}", prefix, text),
            (_, None) => text.to_string(),
        }
    }
}
