pub mod name;
pub mod not_found;
pub mod todos;

use dioxus::prelude::*;

use name::NameEntry;
use not_found::NotFound;
use todos::TodoList;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    TodoList {},
    #[route("/name")]
    NameEntry {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
