//! The navigation surface.
//!
//! Controllers never perform routing themselves; operations that move the
//! user return the [`View`] to navigate to and the embedding shell decides
//! what to do with it.

/// Named views reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page with the product grid and login form.
    Home,
    /// Admin panel (order status updates, user directory).
    Admin,
    /// Cart contents.
    Cart,
    /// Order tracking lookup.
    OrderTracking,
    /// Profile page with registration and purchase history.
    UserProfile,
    /// Person directory (admin-maintained remote list).
    PersonList,
}

impl View {
    /// The path this view is reachable at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/admin",
            Self::Cart => "/cart",
            Self::OrderTracking => "/order-tracking",
            Self::UserProfile => "/user-profile",
            Self::PersonList => "/person-list",
        }
    }

    /// Resolve a path back to its view.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/admin" => Some(Self::Admin),
            "/cart" => Some(Self::Cart),
            "/order-tracking" => Some(Self::OrderTracking),
            "/user-profile" => Some(Self::UserProfile),
            "/person-list" => Some(Self::PersonList),
            _ => None,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [View; 6] = [
        View::Home,
        View::Admin,
        View::Cart,
        View::OrderTracking,
        View::UserProfile,
        View::PersonList,
    ];

    #[test]
    fn test_paths_roundtrip() {
        for view in ALL {
            assert_eq!(View::from_path(view.path()), Some(view));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(View::from_path("/checkout"), None);
    }
}
