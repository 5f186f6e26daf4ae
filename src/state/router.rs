/// The two screens of the app, addressed by browser path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Form,
}

impl Route {
    /// Anything that is not `/login` is the form.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            _ => Route::Form,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Form => "/",
        }
    }

    /// Route actually rendered for a request, after the auth redirects.
    pub fn resolve(requested: Route, authenticated: bool) -> Route {
        match (requested, authenticated) {
            (Route::Login, true) => Route::Form,
            (Route::Form, false) => Route::Login,
            (route, _) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/"), Route::Form);
        assert_eq!(Route::from_path(""), Route::Form);
        assert_eq!(Route::from_path("/elsewhere"), Route::Form);
    }

    #[test]
    fn redirect_table() {
        assert_eq!(Route::resolve(Route::Login, true), Route::Form);
        assert_eq!(Route::resolve(Route::Login, false), Route::Login);
        assert_eq!(Route::resolve(Route::Form, true), Route::Form);
        assert_eq!(Route::resolve(Route::Form, false), Route::Login);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Login, Route::Form] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
