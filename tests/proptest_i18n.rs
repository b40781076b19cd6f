//! Property-based tests for placeholder interpolation.

use proptest::prelude::*;
use storefront_state::{Params, interpolate, placeholders};

proptest! {
    #[test]
    fn text_without_braces_is_unchanged(text in "[^{}]{0,40}", value in "[a-z]{0,8}") {
        let params = Params::new().with("name", &value);
        prop_assert_eq!(interpolate(&text, &params), text);
    }

    #[test]
    fn every_placeholder_is_replaced(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        name in "[a-z_][a-z0-9_]{0,8}",
        value in "[A-Za-z0-9 ]{0,12}",
    ) {
        let template = format!("{}{{{{{}}}}}{}{{{{{}}}}}", prefix, name, suffix, name);
        let params = Params::new().with(name.clone(), &value);

        prop_assert_eq!(placeholders(&template).get(&name).copied(), Some(2));
        prop_assert_eq!(
            interpolate(&template, &params),
            format!("{}{}{}{}", prefix, value, suffix, value)
        );
    }

    #[test]
    fn missing_parameters_stay_literal(name in "[a-z]{1,8}") {
        let template = format!("x {{{{{}}}}} y", name);
        prop_assert_eq!(interpolate(&template, &Params::new()), template);
    }
}
