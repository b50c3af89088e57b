//! Template-engine integration for the route predicates.
//!
//! Template engines deal in dynamically typed values and call helpers by
//! name, so this module wraps the typed predicates on
//! [`RouteContext`](crate::RouteContext) in two engine-agnostic layers:
//!
//! - [`call_route_helper`] - direct name-based dispatch for engines that
//!   route helper calls through a single entry point.
//! - [`HelperRegistry`] - a named set of [`NativeHelper`] entries for engines
//!   that register one template function per helper. Registration is a
//!   one-time composition step at startup: iterate [`HelperRegistry::names`]
//!   and define a template function per name that delegates to
//!   [`HelperRegistry::call`] with the context of the current render.
//!
//! Name-list arguments follow template conventions: zero or more string
//! arguments, or a single array argument that splats into its elements.

use indexmap::IndexMap;

use crate::context::RouteContext;
use crate::error::HelperError;

/// The subset of a template engine's value space the route helpers consume
/// and produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    /// Human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Convert a single argument to an identifier.
fn identifier_arg<'a>(helper: &str, value: &'a Value) -> Result<&'a str, HelperError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(HelperError::invalid_argument(
            helper,
            "a string",
            other.type_name(),
        )),
    }
}

/// Convert a list of values to identifiers.
fn identifier_list<'a>(helper: &str, values: &'a [Value]) -> Result<Vec<&'a str>, HelperError> {
    values
        .iter()
        .map(|value| identifier_arg(helper, value))
        .collect()
}

/// Variadic name-list arguments: a single array argument splats into its
/// elements, otherwise every argument must be a string.
fn name_args<'a>(helper: &str, args: &'a [Value]) -> Result<Vec<&'a str>, HelperError> {
    if let [Value::Array(items)] = args {
        identifier_list(helper, items)
    } else {
        identifier_list(helper, args)
    }
}

/// Optional trailing strict flag for `is_new` / `is_edit`.
fn strict_flag(helper: &str, args: &[Value]) -> Result<bool, HelperError> {
    match args {
        [] => Ok(false),
        [Value::Bool(strict)] => Ok(*strict),
        [other] => Err(HelperError::invalid_argument(
            helper,
            "a bool",
            other.type_name(),
        )),
        _ => Err(HelperError::arity_mismatch(helper, "at most 1", args.len())),
    }
}

/// Require an empty argument list.
fn no_args(helper: &str, args: &[Value]) -> Result<(), HelperError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(HelperError::arity_mismatch(helper, "exactly 0", args.len()))
    }
}

fn controller_is(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(
        ctx.controller_is(name_args("controller_is", args)?),
    ))
}

fn action_is(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(ctx.action_is(name_args("action_is", args)?)))
}

fn action_and_controller_in(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    const HELPER: &str = "action_and_controller_in";
    let [actions, controllers] = args else {
        return Err(HelperError::arity_mismatch(HELPER, "exactly 2", args.len()));
    };
    let Value::Array(actions) = actions else {
        return Err(HelperError::invalid_argument(
            HELPER,
            "an array",
            actions.type_name(),
        ));
    };
    let Value::Array(controllers) = controllers else {
        return Err(HelperError::invalid_argument(
            HELPER,
            "an array",
            controllers.type_name(),
        ));
    };
    Ok(Value::Bool(ctx.action_and_controller_in(
        identifier_list(HELPER, actions)?,
        identifier_list(HELPER, controllers)?,
    )))
}

fn controller_with_actions(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    const HELPER: &str = "controller_with_actions";
    let Some((first, rest)) = args.split_first() else {
        return Err(HelperError::arity_mismatch(HELPER, "at least 1", 0));
    };
    let controller = identifier_arg(HELPER, first)?;
    Ok(Value::Bool(
        ctx.controller_with_actions(controller, name_args(HELPER, rest)?),
    ))
}

fn action_with_controllers(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    const HELPER: &str = "action_with_controllers";
    let Some((first, rest)) = args.split_first() else {
        return Err(HelperError::arity_mismatch(HELPER, "at least 1", 0));
    };
    let action = identifier_arg(HELPER, first)?;
    Ok(Value::Bool(
        ctx.action_with_controllers(action, name_args(HELPER, rest)?),
    ))
}

fn is_index(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    no_args("is_index", args)?;
    Ok(Value::Bool(ctx.is_index()))
}

fn is_show(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    no_args("is_show", args)?;
    Ok(Value::Bool(ctx.is_show()))
}

fn is_new(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(ctx.is_new(strict_flag("is_new", args)?)))
}

fn is_edit(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(ctx.is_edit(strict_flag("is_edit", args)?)))
}

fn index_for_controllers(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(
        ctx.index_for_controllers(name_args("index_for_controllers", args)?),
    ))
}

fn show_for_controllers(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(
        ctx.show_for_controllers(name_args("show_for_controllers", args)?),
    ))
}

fn new_for_controllers(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(
        ctx.new_for_controllers(name_args("new_for_controllers", args)?),
    ))
}

fn edit_for_controllers(ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
    Ok(Value::Bool(
        ctx.edit_for_controllers(name_args("edit_for_controllers", args)?),
    ))
}

/// Dispatch a helper call by name.
///
/// Single entry point for engines that funnel every helper call through one
/// function. Unknown names and malformed arguments surface as
/// [`HelperError`]; all successful calls return [`Value::Bool`].
pub fn call_route_helper(
    ctx: &RouteContext,
    name: &str,
    args: &[Value],
) -> Result<Value, HelperError> {
    match name {
        "controller_is" => controller_is(ctx, args),
        "action_is" => action_is(ctx, args),
        "action_and_controller_in" => action_and_controller_in(ctx, args),
        "controller_with_actions" => controller_with_actions(ctx, args),
        "action_with_controllers" => action_with_controllers(ctx, args),
        "is_index" => is_index(ctx, args),
        "is_show" => is_show(ctx, args),
        "is_new" => is_new(ctx, args),
        "is_edit" => is_edit(ctx, args),
        "index_for_controllers" => index_for_controllers(ctx, args),
        "show_for_controllers" => show_for_controllers(ctx, args),
        "new_for_controllers" => new_for_controllers(ctx, args),
        "edit_for_controllers" => edit_for_controllers(ctx, args),
        _ => Err(HelperError::unknown_helper(name)),
    }
}

type HelperFn = fn(&RouteContext, &[Value]) -> Result<Value, HelperError>;

/// A named helper function with an optional fixed arity.
///
/// `arity` of `None` means variadic; `Some(n)` is checked before the helper
/// body runs.
#[derive(Debug, Clone, Copy)]
pub struct NativeHelper {
    name: &'static str,
    arity: Option<usize>,
    func: HelperFn,
}

impl NativeHelper {
    pub fn new(name: &'static str, arity: Option<usize>, func: HelperFn) -> Self {
        Self { name, arity, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Invoke the helper against a route context.
    pub fn call(&self, ctx: &RouteContext, args: &[Value]) -> Result<Value, HelperError> {
        if let Some(expected) = self.arity {
            if args.len() != expected {
                return Err(HelperError::arity_mismatch(
                    self.name,
                    format!("exactly {}", expected),
                    args.len(),
                ));
            }
        }
        (self.func)(ctx, args)
    }
}

/// The full set of route helpers, keyed by template-visible name.
///
/// Hosts build one registry at startup and share it across renders; it holds
/// no per-request state. Iteration order matches registration order.
pub struct HelperRegistry {
    helpers: IndexMap<&'static str, NativeHelper>,
}

impl HelperRegistry {
    /// Build the standard helper set.
    pub fn standard() -> Self {
        let mut registry = Self {
            helpers: IndexMap::new(),
        };
        registry.register(NativeHelper::new("controller_is", None, controller_is));
        registry.register(NativeHelper::new("action_is", None, action_is));
        registry.register(NativeHelper::new(
            "action_and_controller_in",
            Some(2),
            action_and_controller_in,
        ));
        registry.register(NativeHelper::new(
            "controller_with_actions",
            None,
            controller_with_actions,
        ));
        registry.register(NativeHelper::new(
            "action_with_controllers",
            None,
            action_with_controllers,
        ));
        registry.register(NativeHelper::new("is_index", Some(0), is_index));
        registry.register(NativeHelper::new("is_show", Some(0), is_show));
        registry.register(NativeHelper::new("is_new", None, is_new));
        registry.register(NativeHelper::new("is_edit", None, is_edit));
        registry.register(NativeHelper::new(
            "index_for_controllers",
            None,
            index_for_controllers,
        ));
        registry.register(NativeHelper::new(
            "show_for_controllers",
            None,
            show_for_controllers,
        ));
        registry.register(NativeHelper::new(
            "new_for_controllers",
            None,
            new_for_controllers,
        ));
        registry.register(NativeHelper::new(
            "edit_for_controllers",
            None,
            edit_for_controllers,
        ));
        registry
    }

    fn register(&mut self, helper: NativeHelper) {
        self.helpers.insert(helper.name(), helper);
    }

    /// Invoke a registered helper by name.
    pub fn call(
        &self,
        ctx: &RouteContext,
        name: &str,
        args: &[Value],
    ) -> Result<Value, HelperError> {
        let helper = self
            .helpers
            .get(name)
            .ok_or_else(|| HelperError::unknown_helper(name))?;
        helper.call(ctx, args)
    }

    pub fn get(&self, name: &str) -> Option<&NativeHelper> {
        self.helpers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Helper names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
