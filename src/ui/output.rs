use picktest::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::theme::{paint, Icon, SemanticColor};

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        return;
    }
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        eprintln!(
            "{} Unknown config key '{}' in {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            w.key,
            location
        );
        if let Some(suggestion) = &w.suggestion {
            eprintln!(
                "   {}",
                paint(&format!("Did you mean '{}'?", suggestion), SemanticColor::Dim, ui.color)
            );
        }
    }
}

/// Informational line on stderr, unless quiet
pub fn note(ui: &UiContext, icon: Icon, message: &str) {
    if ui.quiet {
        return;
    }
    eprintln!("{} {}", icon.colored(ui.color, ui.unicode), message);
}
