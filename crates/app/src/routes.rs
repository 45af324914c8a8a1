//! Route table.

use serde::{Deserialize, Serialize};

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/products`
    ProductList,
    /// `/product/add`
    ProductAdd,
    /// `/product/edit/:id`
    ProductEdit(String),
}

impl Route {
    /// Resolve a path. The empty path and `/` redirect to the product list.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["products"] => Some(Route::ProductList),
            ["product", "add"] => Some(Route::ProductAdd),
            ["product", "edit", id] if !id.is_empty() => Some(Route::ProductEdit(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::ProductList => "/products".to_string(),
            Route::ProductAdd => "/product/add".to_string(),
            Route::ProductEdit(id) => format!("/product/edit/{id}"),
        }
    }

    /// Route parameter handed to the form: `Some(id)` selects edit mode.
    pub fn form_id(&self) -> Option<&str> {
        match self {
            Route::ProductEdit(id) => Some(id),
            _ => None,
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path())
    }
}

/// The external router.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/products"), Some(Route::ProductList));
        assert_eq!(Route::parse("/product/add"), Some(Route::ProductAdd));
        assert_eq!(
            Route::parse("/product/edit/123"),
            Some(Route::ProductEdit("123".to_string()))
        );
    }

    #[test]
    fn empty_path_redirects_to_list() {
        assert_eq!(Route::parse(""), Some(Route::ProductList));
        assert_eq!(Route::parse("/"), Some(Route::ProductList));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(Route::parse("/product"), None);
        assert_eq!(Route::parse("/product/edit"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::ProductList,
            Route::ProductAdd,
            Route::ProductEdit("abc".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
    }

    #[test]
    fn only_edit_route_carries_form_id() {
        assert_eq!(Route::ProductEdit("123".to_string()).form_id(), Some("123"));
        assert_eq!(Route::ProductAdd.form_id(), None);
    }
}
