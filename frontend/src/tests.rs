#[cfg(test)]
mod tests {
    use crate::components::common_toast::{Toast, ToastType};
    use crate::{Access, Route};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared::SharedError;
    use yew_router::Routable;

    #[rstest]
    #[case(Route::Landing, "/")]
    #[case(Route::ForgotPassword, "/forgot-password")]
    #[case(Route::ResetPassword, "/reset-password")]
    #[case(Route::Dashboard, "/dashboard")]
    #[case(Route::Settings, "/settings")]
    fn test_route_paths(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.to_path(), path);
        assert_eq!(Route::recognize(path), Some(route));
    }

    #[rstest]
    #[case("/not-found")]
    #[case("/no-such-page")]
    #[case("/dashboard/extra/segments")]
    fn test_unknown_paths_fall_through_to_not_found(#[case] path: &str) {
        assert_eq!(Route::recognize(path), Some(Route::NotFound));
    }

    #[rstest]
    #[case(Route::Dashboard)]
    #[case(Route::Trends)]
    #[case(Route::Insights)]
    #[case(Route::Audience)]
    #[case(Route::Settings)]
    fn test_protected_routes_send_guests_to_login(#[case] route: Route) {
        assert_eq!(route.access(), Access::Protected);
        assert_eq!(route.access().redirect(false), Some(Route::Login));
        assert_eq!(route.access().redirect(true), None);
    }

    #[rstest]
    #[case(Route::Login)]
    #[case(Route::Signup)]
    #[case(Route::ForgotPassword)]
    #[case(Route::ResetPassword)]
    fn test_auth_forms_send_members_to_dashboard(#[case] route: Route) {
        assert_eq!(route.access().redirect(true), Some(Route::Dashboard));
        assert_eq!(route.access().redirect(false), None);
    }

    #[test]
    fn test_public_routes_never_redirect() {
        for route in [Route::Landing, Route::NotFound] {
            assert_eq!(route.access(), Access::Public);
            assert_eq!(route.access().redirect(false), None);
            assert_eq!(route.access().redirect(true), None);
        }
    }

    #[test]
    fn test_toast_from_error_hides_internal_detail() {
        let toast = Toast::from_error(&SharedError::Conversion("bad json at 3:4".into()));
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.message, "Something went wrong. Please try again.");

        let toast = Toast::from_error(&SharedError::not_found("Video"));
        assert_eq!(toast.message, "Video not found");
    }

    #[test]
    fn test_toasts_get_distinct_ids() {
        let a = Toast::success("Saved");
        let b = Toast::success("Saved");
        assert_ne!(a.id, b.id);
    }
}
