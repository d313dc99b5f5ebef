//! Context-set compilation into exclusion directives.
//!
//! Two independent compilers share the fragment vocabulary but derive their
//! directives differently:
//!
//! - [`compile_show`] takes the contexts where a field stays *visible* and
//!   derives the minimal directive hiding it everywhere else.
//! - [`compile_hide`] takes the contexts where a field must be *hidden* and
//!   derives the directive directly. This is not the negation of the show
//!   side: hiding query also hides the filter and sort-order surfaces,
//!   while a read-only show only couples the filter surface.
//!
//! Both compilers normalize once up front (query subsumes read) and are
//! total over all sixteen context subsets.

use crate::schema::{Attribute, Literal};
use crate::types::{
    Context, ContextSet, Exclusion, FRAGMENT_CREATE, FRAGMENT_ORDER_BY, FRAGMENT_OUTPUT,
    FRAGMENT_UPDATE, FRAGMENT_WHERE,
};

/// The result of parsing one attribute invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedContexts {
    /// Contexts named with a literal `true`.
    pub set: ContextSet,
    /// Whether the invocation carried any arguments at all. A zero-argument
    /// invocation is a distinguished "everywhere" shortcut and must not be
    /// confused with all four contexts explicitly false.
    pub explicit: bool,
    /// Argument names outside the four recognized contexts, in invocation
    /// order. The caller emits one warning per entry.
    pub unknown: Vec<String>,
}

/// Extract the context set from an attribute invocation.
///
/// Only arguments whose value is the boolean literal `true` contribute;
/// `false` and non-boolean values are equivalent to absence. Unknown names
/// are collected, not dropped silently.
pub fn parse_contexts(attribute: &Attribute) -> ParsedContexts {
    let mut set = ContextSet::new();
    let mut unknown = Vec::new();

    for arg in &attribute.args {
        match Context::parse(&arg.name) {
            Some(context) => {
                if matches!(arg.value, Literal::Boolean(true)) {
                    set.insert(context);
                }
            }
            None => unknown.push(arg.name.clone()),
        }
    }

    ParsedContexts {
        set,
        explicit: !attribute.args.is_empty(),
        unknown,
    }
}

/// Compile a "show" context set: contexts where the field remains visible.
///
/// Absence of a context means the field must be excluded from that surface.
/// An empty set compiles to [`Exclusion::None`]; the ergonomic reading of
/// `show()` and of all-false flags is "show everywhere".
pub fn compile_show(contexts: ContextSet) -> Exclusion {
    let set = contexts.normalize();
    if set.is_empty() {
        return Exclusion::None;
    }

    let hide_output = !set.query && !set.read;

    let mut fragments: Vec<&str> = Vec::new();
    // Read without query shows output but keeps the field out of filters.
    if set.read {
        fragments.push(FRAGMENT_WHERE);
    }
    if !set.create {
        fragments.push(FRAGMENT_CREATE);
    }
    if !set.update {
        fragments.push(FRAGMENT_UPDATE);
    }

    if fragments.is_empty() {
        // Both input forms visible: either fully visible, or only the
        // output surface is excluded and the coarse form suffices.
        if hide_output {
            Exclusion::hide_output()
        } else {
            Exclusion::None
        }
    } else {
        Exclusion::pattern(&fragments)
    }
}

/// Compile a "hide" context set: contexts where the field must be excluded.
///
/// An empty set compiles to [`Exclusion::None`]; the caller decides whether
/// that is the zero-argument "hide everywhere" shortcut (handled before
/// calling this) or a vacuous invocation worth a warning.
pub fn compile_hide(contexts: ContextSet) -> Exclusion {
    let set = contexts.normalize();
    if set.is_empty() {
        return Exclusion::None;
    }

    let hide_output = set.query || set.read;

    let mut fragments: Vec<&str> = Vec::new();
    // Filter and sort-order surfaces are coupled to querying specifically,
    // not to read-only result hiding.
    if set.query {
        fragments.push(FRAGMENT_WHERE);
        fragments.push(FRAGMENT_ORDER_BY);
    }
    if set.create {
        fragments.push(FRAGMENT_CREATE);
    }
    if set.update {
        fragments.push(FRAGMENT_UPDATE);
    }

    // Output, filter, create, and update all excluded: hidden everywhere.
    if set.query && set.create && set.update {
        return Exclusion::hide_everywhere();
    }

    // Output excluded with both input forms untouched.
    if hide_output && !set.create && !set.update {
        return Exclusion::hide_output();
    }

    if !hide_output {
        return Exclusion::pattern(&fragments);
    }

    // Mixed case: output excluded plus some but not all input surfaces.
    // Filter/sort-order fragments are output-coupled and cannot be stated
    // separately once output is fully excluded; drop them and mark the
    // output surface with the dedicated fragment instead.
    fragments.retain(|f| *f != FRAGMENT_WHERE && *f != FRAGMENT_ORDER_BY);
    if fragments.is_empty() {
        return Exclusion::hide_output();
    }
    fragments.push(FRAGMENT_OUTPUT);
    Exclusion::pattern(&fragments)
}
