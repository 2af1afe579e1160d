//! Bottom-navigation tabs, their destinations, and active-route matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const FEED_PATH: &str = "/feed";
pub const CREATE_PATH: &str = "/create";
pub const MY_ITEMS_PATH: &str = "/my-items";
pub const ACCOUNT_PATH: &str = "/me";

/// How a tab decides whether the current route belongs to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Exact(&'static str),
    Prefix(&'static str),
}

impl RouteMatch {
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(target) => path == target,
            Self::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// Buttons in the bottom navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Feed,
    List,
    MyItems,
    Account,
}

impl NavTab {
    pub const ALL: [Self; 4] = [Self::Feed, Self::List, Self::MyItems, Self::Account];

    pub fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::List => "List",
            Self::MyItems => "My Items",
            Self::Account => "Account",
        }
    }

    pub fn route_match(self) -> RouteMatch {
        match self {
            Self::Feed => RouteMatch::Exact(FEED_PATH),
            Self::List => RouteMatch::Exact(CREATE_PATH),
            Self::MyItems => RouteMatch::Prefix(MY_ITEMS_PATH),
            Self::Account => RouteMatch::Prefix(ACCOUNT_PATH),
        }
    }

    pub fn is_active(self, path: &str) -> bool {
        self.route_match().matches(path)
    }

    /// Where clicking the tab navigates.
    ///
    /// Listing an item requires an institutional account; everyone else is
    /// sent to the account page to sign in.
    pub fn destination(self, authorized: bool) -> &'static str {
        match self {
            Self::Feed => FEED_PATH,
            Self::List if authorized => CREATE_PATH,
            Self::List => ACCOUNT_PATH,
            Self::MyItems => MY_ITEMS_PATH,
            Self::Account => ACCOUNT_PATH,
        }
    }
}
