use picktest::PicktestError;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::theme::{paint, Icon, SemanticColor};

/// Follow-up suggestion for errors the user can fix by retrying
fn hint(err: &PicktestError) -> Option<&'static str> {
    match err {
        PicktestError::NotFound { .. } => Some("Run `picktest tree` to see what is available."),
        PicktestError::UnknownParam { .. } => {
            Some("Run `picktest items --params <EXPR>` to list parameter identifiers.")
        }
        PicktestError::IndexOutOfRange { .. } | PicktestError::InvalidSlice { .. } => {
            Some("Run `picktest items <EXPR>` to see the positions.")
        }
        PicktestError::InvalidExpression { .. } => {
            Some("Expressions look like `mod_a.test_x[0:2]` or `TestBoth.test_m@a@dog`.")
        }
        PicktestError::SnapshotNotFound { .. } => {
            Some("Run `picktest snapshot list` to see saved selections.")
        }
        PicktestError::EmptySelection => Some("Add tests with an expression first."),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(color, unicode),
        paint(&err.to_string(), SemanticColor::Error, color)
    );

    if let Some(hint) = err.downcast_ref::<PicktestError>().and_then(hint) {
        out.push_str(&format!("  {}\n", paint(hint, SemanticColor::Dim, color)));
    }

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {}\n",
            paint(&format!("caused by: {}", cause), SemanticColor::Dim, color)
        ));
    }
    out
}

/// Report a failed command on stderr, or as an NDJSON event on stdout
pub fn report(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let recoverable = err
            .downcast_ref::<PicktestError>()
            .is_some_and(PicktestError::is_recoverable);
        // stdout may already be gone; stderr still gets the message
        if json::emit(json::error_event(&err.to_string(), recoverable)).is_ok() {
            return;
        }
    }
    eprint!("{}", format_error_with(err, ui.color, ui.unicode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors_carry_a_hint() {
        let err = anyhow::Error::new(PicktestError::NotFound {
            path: "t".to_string(),
            name: "test_b".to_string(),
        });

        let out = format_error_with(&err, false, false);

        assert_eq!(
            out,
            "[FAIL] no test set named 'test_b' under 't'\n  Run `picktest tree` to see what is available.\n"
        );
    }

    #[test]
    fn context_is_listed_as_causes() {
        let err = anyhow::anyhow!("disk on fire").context("could not save selection");

        let out = format_error_with(&err, false, true);

        assert_eq!(out, "✗ could not save selection\n  caused by: disk on fire\n");
    }
}
