//! Readable route-context predicates for server-rendered views.
//!
//! Templates often need to ask "is the current request routed to controller
//! X and action Y?" and raw string comparisons make that noisy. This crate
//! wraps the comparisons in named boolean helpers over an explicit
//! [`RouteContext`]:
//!
//! ```
//! use route_context_helpers::RouteContext;
//!
//! let ctx = RouteContext::new("users", "create");
//! assert!(ctx.controller_is(["users", "members"]));
//! assert!(ctx.is_new(false)); // a failed create re-renders the new template
//! assert!(!ctx.is_new(true));
//! ```
//!
//! The host framework builds a fresh `RouteContext` per render and either
//! calls the predicates directly or exposes them to templates through the
//! [`helpers`] module's name-based dispatch and [`HelperRegistry`].

pub mod context;
pub mod error;
pub mod helpers;

pub use context::{normalize_controller_name, RouteContext};
pub use error::HelperError;
pub use helpers::{call_route_helper, HelperRegistry, NativeHelper, Value};
