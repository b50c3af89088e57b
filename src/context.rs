//! The ambient route context and its predicate surface.
//!
//! `RouteContext` carries the (controller, action) identifier pair the host
//! framework resolved for the current render. Every predicate is a pure
//! function of the context and its explicit arguments: no caching, no I/O,
//! no mutation. A fresh context is built per render, so predicates always
//! see the identifiers of the request currently being served.

use std::fmt;

/// The `(controller, action)` identifier pair for the current view render.
///
/// Identifiers are compared as case-sensitive text. The host framework
/// supplies both values when the render starts; this type never reads them
/// from anywhere ambient, which keeps every predicate unit-testable without
/// a running server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    controller: String,
    action: String,
}

impl RouteContext {
    /// Create a context from the current controller and action identifiers.
    ///
    /// Accepts anything convertible to a string, so hosts can pass borrowed
    /// names straight from their routing tables. Conversion happens once,
    /// here, and every comparison afterwards is plain text equality.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Parse a `controller#action` handler name into a context.
    ///
    /// Returns `None` when the `#` separator is missing or either side is
    /// empty.
    pub fn from_handler(handler: &str) -> Option<Self> {
        let (controller, action) = handler.split_once('#')?;
        if controller.is_empty() || action.is_empty() {
            return None;
        }
        Some(Self::new(controller, action))
    }

    /// The current controller identifier.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The current action identifier.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// True when the current controller is one of `names`.
    ///
    /// An empty list never matches: there is nothing to be a member of.
    pub fn controller_is<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().any(|name| name.as_ref() == self.controller)
    }

    /// True when the current action is one of `names`.
    ///
    /// Same contract as [`controller_is`](Self::controller_is): empty list,
    /// no match.
    pub fn action_is<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().any(|name| name.as_ref() == self.action)
    }

    /// True when the current action is in `actions` and the current
    /// controller is in `controllers`.
    pub fn action_and_controller_in<A, S, C, T>(&self, actions: A, controllers: C) -> bool
    where
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.action_is(actions) && self.controller_is(controllers)
    }

    /// True when the current controller equals `controller` exactly and the
    /// current action is in `actions`.
    pub fn controller_with_actions<I, S>(&self, controller: impl AsRef<str>, actions: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.controller == controller.as_ref() && self.action_is(actions)
    }

    /// True when the current action equals `action` exactly and the current
    /// controller is in `controllers`.
    pub fn action_with_controllers<I, S>(&self, action: impl AsRef<str>, controllers: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.action == action.as_ref() && self.controller_is(controllers)
    }

    /// True when the current action is `index`.
    pub fn is_index(&self) -> bool {
        self.action == "index"
    }

    /// True when the current action is `show`.
    pub fn is_show(&self) -> bool {
        self.action == "show"
    }

    /// True when the current action is new-like.
    ///
    /// Controllers typically re-render the `new` template when a create
    /// fails validation, so the lenient form (`strict = false`) also matches
    /// the `create` action. Pass `strict = true` to match only `new`.
    pub fn is_new(&self, strict: bool) -> bool {
        if strict {
            self.action == "new"
        } else {
            self.action_is(["new", "create"])
        }
    }

    /// True when the current action is edit-like.
    ///
    /// Symmetric to [`is_new`](Self::is_new): the lenient form also matches
    /// `update`, since a failed update re-renders the `edit` template.
    pub fn is_edit(&self, strict: bool) -> bool {
        if strict {
            self.action == "edit"
        } else {
            self.action_is(["edit", "update"])
        }
    }

    /// True when the current action is `index` and the controller is in
    /// `names`.
    pub fn index_for_controllers<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_index() && self.controller_is(names)
    }

    /// True when the current action is `show` and the controller is in
    /// `names`.
    pub fn show_for_controllers<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_show() && self.controller_is(names)
    }

    /// True when the current action is new-like (lenient, includes `create`)
    /// and the controller is in `names`.
    pub fn new_for_controllers<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_new(false) && self.controller_is(names)
    }

    /// True when the current action is edit-like (lenient, includes `update`)
    /// and the controller is in `names`.
    pub fn edit_for_controllers<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_edit(false) && self.controller_is(names)
    }
}

impl fmt::Display for RouteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// Strip the conventional `_controller` file-name suffix.
///
/// Hosts that derive controller identifiers from filenames
/// (`users_controller` for the users controller) pass the result to
/// [`RouteContext::new`] so templates compare against the bare name.
pub fn normalize_controller_name(name: &str) -> &str {
    name.trim_end_matches("_controller")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_converts_any_string_like() {
        let owned = RouteContext::new(String::from("users"), String::from("index"));
        let borrowed = RouteContext::new("users", "index");
        assert_eq!(owned, borrowed);
        assert_eq!(owned.controller(), "users");
        assert_eq!(owned.action(), "index");
    }

    #[test]
    fn test_from_handler() {
        let ctx = RouteContext::from_handler("users#show").unwrap();
        assert_eq!(ctx.controller(), "users");
        assert_eq!(ctx.action(), "show");

        assert!(RouteContext::from_handler("users").is_none());
        assert!(RouteContext::from_handler("#show").is_none());
        assert!(RouteContext::from_handler("users#").is_none());
    }

    #[test]
    fn test_display_round_trips_handler_form() {
        let ctx = RouteContext::from_handler("blog_posts#edit").unwrap();
        assert_eq!(ctx.to_string(), "blog_posts#edit");
    }

    #[test]
    fn test_controller_is_membership() {
        let ctx = RouteContext::new("users", "index");
        assert!(ctx.controller_is(["users"]));
        assert!(ctx.controller_is(["members", "users", "guests"]));
        assert!(!ctx.controller_is(["members", "guests"]));
        // Duplicates and ordering are irrelevant.
        assert!(ctx.controller_is(["users", "users"]));
    }

    #[test]
    fn test_empty_name_list_is_false() {
        let ctx = RouteContext::new("users", "index");
        let none: [&str; 0] = [];
        assert!(!ctx.controller_is(none));
        assert!(!ctx.action_is(none));
        assert!(!ctx.index_for_controllers(none));
        assert!(!ctx.show_for_controllers(none));
        assert!(!ctx.new_for_controllers(none));
        assert!(!ctx.edit_for_controllers(none));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let ctx = RouteContext::new("Users", "Index");
        assert!(!ctx.controller_is(["users"]));
        assert!(!ctx.is_index());
        assert!(ctx.controller_is(["Users"]));
    }

    #[test]
    fn test_action_is_membership() {
        let ctx = RouteContext::new("users", "show");
        assert!(ctx.action_is(["index", "show"]));
        assert!(!ctx.action_is(["index", "edit"]));
    }

    #[test]
    fn test_action_and_controller_in() {
        let ctx = RouteContext::new("members", "show");
        assert!(ctx.action_and_controller_in(["index", "show"], ["users", "members"]));
        assert!(!ctx.action_and_controller_in(["index"], ["users", "members"]));
        assert!(!ctx.action_and_controller_in(["index", "show"], ["users"]));
    }

    #[test]
    fn test_controller_with_actions_requires_exact_controller() {
        let ctx = RouteContext::new("users", "create");
        assert!(ctx.controller_with_actions("users", ["new", "create"]));
        // Action matches but controller does not.
        assert!(!ctx.controller_with_actions("members", ["new", "create"]));
        // Controller matches but action does not.
        assert!(!ctx.controller_with_actions("users", ["edit", "update"]));
    }

    #[test]
    fn test_action_with_controllers_requires_exact_action() {
        let ctx = RouteContext::new("users", "archive");
        assert!(ctx.action_with_controllers("archive", ["users", "members"]));
        assert!(!ctx.action_with_controllers("restore", ["users", "members"]));
        assert!(!ctx.action_with_controllers("archive", ["guests"]));
    }

    #[test]
    fn test_is_index_and_is_show() {
        assert!(RouteContext::new("users", "index").is_index());
        assert!(!RouteContext::new("users", "show").is_index());
        assert!(RouteContext::new("users", "show").is_show());
        assert!(!RouteContext::new("users", "index").is_show());
    }

    #[test]
    fn test_is_new_lenient_includes_create() {
        assert!(RouteContext::new("users", "new").is_new(false));
        assert!(RouteContext::new("users", "create").is_new(false));
        assert!(!RouteContext::new("users", "edit").is_new(false));
    }

    #[test]
    fn test_is_new_strict_matches_only_new() {
        assert!(RouteContext::new("users", "new").is_new(true));
        assert!(!RouteContext::new("users", "create").is_new(true));
    }

    #[test]
    fn test_is_edit_symmetric_to_is_new() {
        assert!(RouteContext::new("users", "edit").is_edit(false));
        assert!(RouteContext::new("users", "update").is_edit(false));
        assert!(!RouteContext::new("users", "create").is_edit(false));
        assert!(RouteContext::new("users", "edit").is_edit(true));
        assert!(!RouteContext::new("users", "update").is_edit(true));
    }

    #[test]
    fn test_index_for_controllers() {
        let ctx = RouteContext::new("users", "index");
        assert!(ctx.index_for_controllers(["users"]));
        assert!(ctx.index_for_controllers(["members", "users"]));
        assert!(!ctx.index_for_controllers(["members"]));

        let other = RouteContext::new("members", "index");
        assert!(!other.index_for_controllers(["users"]));

        let wrong_action = RouteContext::new("users", "show");
        assert!(!wrong_action.index_for_controllers(["users"]));
    }

    #[test]
    fn test_show_for_controllers() {
        let ctx = RouteContext::new("posts", "show");
        assert!(ctx.show_for_controllers(["posts", "pages"]));
        assert!(!ctx.show_for_controllers(["pages"]));
        assert!(!RouteContext::new("posts", "index").show_for_controllers(["posts"]));
    }

    #[test]
    fn test_failed_create_scenario() {
        // A failed create re-renders the "new" template with action=create.
        let ctx = RouteContext::new("users", "create");
        assert!(ctx.is_new(false));
        assert!(!ctx.is_new(true));
        assert!(ctx.controller_with_actions("users", ["new", "create"]));
        assert!(!ctx.controller_with_actions("members", ["new", "create"]));
        assert!(ctx.new_for_controllers(["users"]));
    }

    #[test]
    fn test_failed_update_scenario() {
        let ctx = RouteContext::new("members", "update");
        assert!(ctx.is_edit(false));
        assert!(ctx.edit_for_controllers(["users", "members"]));
        assert!(!ctx.edit_for_controllers(["guests"]));
    }

    #[test]
    fn test_predicates_are_pure() {
        let ctx = RouteContext::new("users", "index");
        let first = ctx.index_for_controllers(["users", "members"]);
        let second = ctx.index_for_controllers(["users", "members"]);
        assert_eq!(first, second);
        assert_eq!(ctx.is_new(false), ctx.is_new(false));
    }

    #[test]
    fn test_normalize_controller_name() {
        assert_eq!(normalize_controller_name("users_controller"), "users");
        assert_eq!(
            normalize_controller_name("blog_posts_controller"),
            "blog_posts"
        );
        assert_eq!(normalize_controller_name("users"), "users");
    }
}
