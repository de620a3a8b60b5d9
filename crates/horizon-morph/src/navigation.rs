//! Navigation collaborator.
//!
//! The button does not route anything itself. Once the expansion has covered
//! the screen it hands its destination to a [`Navigator`] supplied by the
//! host, which replaces the current screen.

use std::fmt;

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Identifier of a navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    /// Create a route from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The route identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Route {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Replaces the current screen with another.
///
/// The returned future resolves once the replacement has been issued. It is
/// awaited but its completion carries no result; the host owns any failure
/// handling for its own routing.
pub trait Navigator: Send + Sync + 'static {
    /// Replace the current screen with `destination`.
    fn replace_current_screen(&self, destination: &Route) -> BoxFuture<'static, ()>;
}

impl<F> Navigator for F
where
    F: Fn(&Route) -> BoxFuture<'static, ()> + Send + Sync + 'static,
{
    fn replace_current_screen(&self, destination: &Route) -> BoxFuture<'static, ()> {
        self(destination)
    }
}
