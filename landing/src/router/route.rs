//! Route table: the fixed set of paths the site serves.

/// Every page the site can show.
///
/// Paths matching none of the registered patterns resolve to
/// [`Route::NotFound`], so recognition is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Products,
    Contact,
    NotFound,
}

impl Route {
    /// Registered routes, in navigation order.
    pub const REGISTERED: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Products,
        Route::Contact,
    ];

    /// Resolves a browser path to its route.
    ///
    /// Matching ignores case, one trailing slash, the query string and the
    /// fragment: `/Services/?ref=x` is the Services page.
    pub fn recognize(path: &str) -> Route {
        let path = canonical_path(path);
        Self::REGISTERED
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(&path))
            .unwrap_or(Route::NotFound)
    }

    /// Canonical link target. `NotFound` is never linked; its value is only
    /// used for display.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/aboutus",
            Route::Services => "/services",
            Route::Products => "/products",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    /// Page heading.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Innovating Solutions for Tomorrow",
            Route::About => "This is the About Us Page",
            Route::Services => "This is the Services Page",
            Route::Products => "This is the Products Page",
            Route::Contact => "This is the Contact Page",
            Route::NotFound => "Page not found",
        }
    }
}

/// Normalises a raw browser path: query and fragment removed, a single
/// trailing slash removed (except for the root), leading slash ensured.
pub fn canonical_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registered_paths_resolve_to_their_route() {
        for route in Route::REGISTERED {
            assert_eq!(Route::recognize(route.path()), route, "path {}", route.path());
        }
    }

    #[test]
    fn exact_registered_paths() {
        assert_eq!(Route::recognize("/"), Route::Home);
        assert_eq!(Route::recognize("/aboutus"), Route::About);
        assert_eq!(Route::recognize("/services"), Route::Services);
        assert_eq!(Route::recognize("/products"), Route::Products);
        assert_eq!(Route::recognize("/contact"), Route::Contact);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/about"), Route::NotFound);
        assert_eq!(Route::recognize("/services/web"), Route::NotFound);
        assert_eq!(Route::recognize("/404"), Route::NotFound);
        assert!(!Route::REGISTERED.contains(&Route::NotFound));
    }

    #[test]
    fn trailing_slash_case_and_query_are_ignored() {
        assert_eq!(Route::recognize("/services/"), Route::Services);
        assert_eq!(Route::recognize("/Services"), Route::Services);
        assert_eq!(Route::recognize("/contact?from=hero"), Route::Contact);
        assert_eq!(Route::recognize("/products#top"), Route::Products);
        assert_eq!(Route::recognize(""), Route::Home);
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        assert_eq!(Route::recognize("/services//"), Route::NotFound);
    }

    #[test]
    fn canonical_path_normalises() {
        assert_eq!(canonical_path("/"), "/");
        assert_eq!(canonical_path(""), "/");
        assert_eq!(canonical_path("/?q=1"), "/");
        assert_eq!(canonical_path("/aboutus/"), "/aboutus");
        assert_eq!(canonical_path("services"), "/services");
        assert_eq!(canonical_path("/Products#x"), "/Products");
    }

    #[test]
    fn content_page_titles() {
        assert_eq!(Route::About.title(), "This is the About Us Page");
        assert_eq!(Route::Services.title(), "This is the Services Page");
        assert_eq!(Route::Products.title(), "This is the Products Page");
        assert_eq!(Route::Contact.title(), "This is the Contact Page");
    }
}
