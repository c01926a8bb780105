//! Request path and method to action.
//! `/items/5` and `/api/items/5` address the same resource; `/` and `/api` are the health check.

use axum::http::Method;

/// Mount prefix stripped before the resource segment.
pub const MOUNT_PREFIX: &str = "api";
pub const ITEMS: &str = "items";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route<'a> {
    pub resource: &'a str,
    pub id: Option<&'a str>,
    /// Segments after trimming leading and trailing slashes (always at least one).
    pub segments: usize,
}

impl<'a> Route<'a> {
    pub fn parse(path: &'a str) -> Self {
        let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
        let (resource, id) = match parts.as_slice() {
            [MOUNT_PREFIX, resource, rest @ ..] => (*resource, rest.first().copied()),
            [resource, rest @ ..] => (*resource, rest.first().copied()),
            [] => ("", None),
        };
        Route {
            resource,
            id: id.filter(|s| !s.is_empty()),
            segments: parts.len(),
        }
    }

    fn is_root(&self) -> bool {
        (self.resource.is_empty() || self.resource == MOUNT_PREFIX) && self.segments <= 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    /// CORS preflight, answered without touching the database.
    Preflight,
    Health,
    Items(ItemsAction<'a>),
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemsAction<'a> {
    List,
    Get(&'a str),
    Create,
    Update(Option<&'a str>),
    Delete(Option<&'a str>),
    MethodNotAllowed,
}

impl<'a> Action<'a> {
    pub fn select(method: &Method, route: &Route<'a>) -> Self {
        if *method == Method::OPTIONS {
            return Action::Preflight;
        }
        if route.is_root() {
            return if *method == Method::GET { Action::Health } else { Action::Invalid };
        }
        if route.resource != ITEMS {
            return Action::Invalid;
        }
        let action = match *method {
            Method::GET => match route.id {
                Some(id) => ItemsAction::Get(id),
                None => ItemsAction::List,
            },
            Method::POST => ItemsAction::Create,
            Method::PUT => ItemsAction::Update(route.id),
            Method::DELETE => ItemsAction::Delete(route.id),
            _ => ItemsAction::MethodNotAllowed,
        };
        Action::Items(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> (&str, Option<&str>, usize) {
        let r = Route::parse(path);
        (r.resource, r.id, r.segments)
    }

    #[test]
    fn parse_paths() {
        assert_eq!(route("/"), ("", None, 1));
        assert_eq!(route(""), ("", None, 1));
        assert_eq!(route("/api"), ("api", None, 1));
        assert_eq!(route("/api/"), ("api", None, 1));
        assert_eq!(route("/items"), ("items", None, 1));
        assert_eq!(route("/items/"), ("items", None, 1));
        assert_eq!(route("/items/7"), ("items", Some("7"), 2));
        assert_eq!(route("/items/0"), ("items", Some("0"), 2));
        assert_eq!(route("/api/items"), ("items", None, 2));
        assert_eq!(route("/api/items/7/"), ("items", Some("7"), 3));
        assert_eq!(route("/items/7/extra"), ("items", Some("7"), 3));
        assert_eq!(route("/other/7"), ("other", Some("7"), 2));
    }

    fn select(method: Method, path: &str) -> Action<'_> {
        Action::select(&method, &Route::parse(path))
    }

    #[test]
    fn health_only_on_get_root() {
        assert_eq!(select(Method::GET, "/"), Action::Health);
        assert_eq!(select(Method::GET, "/api"), Action::Health);
        assert_eq!(select(Method::POST, "/"), Action::Invalid);
        assert_eq!(select(Method::GET, "/api/api"), Action::Invalid);
    }

    #[test]
    fn items_table() {
        assert_eq!(select(Method::GET, "/items"), Action::Items(ItemsAction::List));
        assert_eq!(select(Method::GET, "/api/items/3"), Action::Items(ItemsAction::Get("3")));
        assert_eq!(select(Method::POST, "/items"), Action::Items(ItemsAction::Create));
        assert_eq!(select(Method::POST, "/items/3"), Action::Items(ItemsAction::Create));
        assert_eq!(select(Method::PUT, "/items/3"), Action::Items(ItemsAction::Update(Some("3"))));
        assert_eq!(select(Method::PUT, "/items"), Action::Items(ItemsAction::Update(None)));
        assert_eq!(select(Method::DELETE, "/items"), Action::Items(ItemsAction::Delete(None)));
        assert_eq!(select(Method::PATCH, "/items/3"), Action::Items(ItemsAction::MethodNotAllowed));
    }

    #[test]
    fn unknown_resource_and_preflight() {
        assert_eq!(select(Method::GET, "/users"), Action::Invalid);
        assert_eq!(select(Method::DELETE, "/users/1"), Action::Invalid);
        assert_eq!(select(Method::OPTIONS, "/items/1"), Action::Preflight);
        assert_eq!(select(Method::OPTIONS, "/anything"), Action::Preflight);
    }
}
