//! Property tests for selection expression parsing.

use proptest::prelude::*;

use picktest::{Expression, PicktestError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics; failures are recoverable.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        if let Err(err) = Expression::parse(&s) {
            let is_expression_error = matches!(err, PicktestError::InvalidExpression { .. });
            prop_assert!(is_expression_error);
            prop_assert!(err.is_recoverable());
        }
    }

    /// PROPERTY: dotted names parse into one child step per name.
    #[test]
    fn property_dotted_names_parse(names in prop::collection::vec("[A-Za-z_][A-Za-z0-9_]{0,8}", 1..5)) {
        let expr = Expression::parse(&names.join(".")).unwrap();
        prop_assert_eq!(expr.steps().len(), names.len());
    }
}
