//! Core types for visibility compilation.

use serde::{Deserialize, Serialize};

/// Valid context names accepted as annotation arguments.
pub const VALID_CONTEXTS: &[&str] = &["query", "read", "create", "update"];

/// Attribute names recognized on fields. Checked in this order.
pub const VISIBILITY_ATTRIBUTES: &[&str] = &["show", "hide"];

/// Pattern fragment matching all generated create input types.
pub const FRAGMENT_CREATE: &str = "*(*Create*Input)";
/// Pattern fragment matching all generated update input types.
pub const FRAGMENT_UPDATE: &str = "*(*Update*Input)";
/// Pattern fragment matching the filter (where) input types.
pub const FRAGMENT_WHERE: &str = "*(Where*Input)";
/// Pattern fragment matching the sort-order input types.
pub const FRAGMENT_ORDER_BY: &str = "*(*OrderBy*Input)";
/// Marker fragment standing in for the output surface in mixed patterns.
///
/// Fixed external syntax; intentionally not in the `*(...)` form the other
/// fragments use.
pub const FRAGMENT_OUTPUT: &str = "(Output)";

/// A visibility context an annotation can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Output visibility plus filter and sort-order visibility.
    Query,
    /// Output visibility only.
    Read,
    Create,
    Update,
}

impl Context {
    /// Parse a context from an annotation argument name.
    ///
    /// Returns `None` for unknown names (caller should warn and drop).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "query" => Some(Context::Query),
            "read" => Some(Context::Read),
            "create" => Some(Context::Create),
            "update" => Some(Context::Update),
            _ => None,
        }
    }
}

/// A set of contexts named by one annotation.
///
/// Duplicates collapse and order is irrelevant; the set is just four flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextSet {
    pub query: bool,
    pub read: bool,
    pub create: bool,
    pub update: bool,
}

impl ContextSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from individual contexts.
    pub fn from_contexts(contexts: &[Context]) -> Self {
        let mut set = Self::new();
        for c in contexts {
            set.insert(*c);
        }
        set
    }

    pub fn insert(&mut self, context: Context) {
        match context {
            Context::Query => self.query = true,
            Context::Read => self.read = true,
            Context::Create => self.create = true,
            Context::Update => self.update = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.query || self.read || self.create || self.update)
    }

    /// Apply the query/read precedence rule.
    ///
    /// Query strictly subsumes Read (output visibility plus filter
    /// visibility), so a set holding both drops Read. Runs once before
    /// either compiler; a normalized set never holds both flags.
    pub fn normalize(mut self) -> Self {
        if self.query && self.read {
            self.read = false;
        }
        self
    }
}

/// Classification of a field's visibility attribute, resolved once per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Show,
    Hide,
    Unrecognized,
}

/// The compiled exclusion directive for one field.
///
/// `Simple` is preferred over `Pattern` whenever it loses no precision,
/// because it renders as a shorter, more stable directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// No exclusion; the field is fully visible and no directive is emitted.
    None,
    /// Coarse on/off for the two broad surfaces: all input forms
    /// collectively, all output/query surfaces collectively.
    Simple {
        input: Option<bool>,
        output: Option<bool>,
    },
    /// A glob-style alternation over generated-type name fragments,
    /// `|`-joined. Used when `Simple` cannot express the exclusion exactly.
    Pattern { expression: String },
}

impl Exclusion {
    /// Build a `Pattern` from an ordered fragment list.
    pub fn pattern(fragments: &[&str]) -> Self {
        Exclusion::Pattern {
            expression: fragments.join("|"),
        }
    }

    /// The "hidden everywhere" directive.
    pub fn hide_everywhere() -> Self {
        Exclusion::Simple {
            input: Some(true),
            output: Some(true),
        }
    }

    /// The "output hidden, input untouched" directive.
    pub fn hide_output() -> Self {
        Exclusion::Simple {
            input: Some(false),
            output: Some(true),
        }
    }
}
