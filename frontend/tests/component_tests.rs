#[cfg(test)]
mod component_tests {
    use frontend::format::{compact_number, percent, signed_percent, sparkline_heights};
    use frontend::{Access, Route};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stat_card_values() {
        assert_eq!(compact_number(2_400_000), "2.4M");
        assert_eq!(compact_number(12_800), "12.8K");
        assert_eq!(percent(68.2), "68.2%");
        assert_eq!(signed_percent(-4.44), "-4.4%");
    }

    #[test]
    fn test_sparkline_keeps_series_length() {
        let heights = sparkline_heights(&[10, 40, 20, 80]);
        assert_eq!(heights.len(), 4);
        assert_eq!(heights.iter().copied().max(), Some(100));
    }

    #[test]
    fn test_auth_forms_are_hidden_from_signed_in_creators() {
        let forms: Vec<Route> = [
            Route::Landing,
            Route::Login,
            Route::Signup,
            Route::ForgotPassword,
            Route::ResetPassword,
            Route::Dashboard,
            Route::NotFound,
        ]
        .into_iter()
        .filter(|route| route.access() == Access::PublicOnly)
        .collect();

        assert_eq!(
            forms,
            vec![Route::Login, Route::Signup, Route::ForgotPassword, Route::ResetPassword]
        );
        assert!(forms
            .iter()
            .all(|route| route.access().redirect(true) == Some(Route::Dashboard)));
    }
}
