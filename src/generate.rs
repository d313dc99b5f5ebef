//! Field classification and directive attachment.
//!
//! Walks every model's fields in declaration order, resolves the visibility
//! attribute once per field, compiles it, and appends the rendered
//! directive to the field's comment list. Re-running a pass over an already
//! annotated document is a no-op.

use std::collections::HashSet;

use serde::Serialize;

use crate::compile::{compile_hide, compile_show, parse_contexts};
use crate::format::{render, HIDE_FIELD_MARKER};
use crate::schema::{Attribute, Datamodel, Field};
use crate::types::{AttributeKind, Exclusion, VALID_CONTEXTS, VISIBILITY_ATTRIBUTES};

/// Warning code: attribute argument name outside the four contexts.
pub const W_UNKNOWN_CONTEXT: &str = "W001";
/// Warning code: hide invocation with explicit arguments but no effect.
pub const W_VACUOUS_HIDE: &str = "W002";

/// An advisory diagnostic attached to one field. Never fatal; processing
/// continues for all other fields.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub code: String,
    pub model: String,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "warning[{}]: {}.{}: {}",
            self.code, self.model, self.field, self.message
        )
    }
}

/// The outcome of one annotation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Relation fields left fully visible.
    pub relations_shown: usize,
    /// Relation fields hidden everywhere because no attribute was present.
    pub relations_hidden: usize,
    /// Non-relation fields that received an exclusion directive.
    pub scalars_hidden: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl Report {
    /// One observability line summarizing the pass.
    pub fn summary(&self) -> String {
        format!(
            "{} relation field(s) shown, {} relation field(s) hidden by default, {} scalar field(s) hidden",
            self.relations_shown, self.relations_hidden, self.scalars_hidden
        )
    }
}

/// Annotate every field of every model with its exclusion directive.
///
/// Deterministic over declaration order; at most one directive is attached
/// per field and a field already carrying a `@HideField` comment is left
/// untouched, so two passes yield byte-identical output.
pub fn annotate(datamodel: &mut Datamodel) -> Report {
    let model_names: HashSet<String> = datamodel
        .models
        .iter()
        .map(|model| model.name.clone())
        .collect();

    let mut report = Report::default();

    for model in &mut datamodel.models {
        let model_name = model.name.clone();
        for field in &mut model.fields {
            annotate_field(field, &model_name, &model_names, &mut report);
        }
    }

    report
}

/// Resolve the field's visibility attribute to a closed classification,
/// once per field. `show` takes precedence when both are present.
fn classify_attribute(field: &Field) -> (AttributeKind, Option<&Attribute>) {
    for name in VISIBILITY_ATTRIBUTES {
        if let Some(attribute) = field.attributes.iter().find(|attr| attr.name == *name) {
            let kind = match *name {
                "show" => AttributeKind::Show,
                _ => AttributeKind::Hide,
            };
            return (kind, Some(attribute));
        }
    }
    (AttributeKind::Unrecognized, None)
}

fn annotate_field(
    field: &mut Field,
    model_name: &str,
    model_names: &HashSet<String>,
    report: &mut Report,
) {
    // A field is a relation exactly when its declared type resolves to a
    // model declaration; scalars, enums, and primitive arrays are not.
    let is_relation = model_names.contains(&field.field_type);

    let (kind, attribute) = classify_attribute(field);
    let directive = match (kind, attribute) {
        (AttributeKind::Show, Some(attribute)) => {
            compile_show_attribute(attribute, model_name, &field.name, report)
        }
        (AttributeKind::Hide, Some(attribute)) => {
            compile_hide_attribute(attribute, model_name, &field.name, report)
        }
        _ => {
            // Defaults: relations hidden everywhere, scalars fully visible.
            if is_relation {
                Exclusion::hide_everywhere()
            } else {
                Exclusion::None
            }
        }
    };

    if is_relation {
        if directive == Exclusion::None {
            report.relations_shown += 1;
        } else if kind == AttributeKind::Unrecognized {
            report.relations_hidden += 1;
        }
    } else if directive != Exclusion::None {
        report.scalars_hidden += 1;
    }

    if let Some(comment) = render(&directive) {
        let already_annotated = field
            .comments
            .iter()
            .any(|existing| existing.contains(HIDE_FIELD_MARKER));
        if !already_annotated {
            field.comments.push(comment);
        }
    }
}

fn compile_show_attribute(
    attribute: &Attribute,
    model_name: &str,
    field_name: &str,
    report: &mut Report,
) -> Exclusion {
    let parsed = parse_contexts(attribute);
    warn_unknown_contexts(&parsed.unknown, model_name, field_name, report);

    // Empty set (no arguments, or no recognized true flags) reads as
    // "show everywhere": no directive.
    compile_show(parsed.set)
}

fn compile_hide_attribute(
    attribute: &Attribute,
    model_name: &str,
    field_name: &str,
    report: &mut Report,
) -> Exclusion {
    let parsed = parse_contexts(attribute);
    warn_unknown_contexts(&parsed.unknown, model_name, field_name, report);

    // Zero-argument hide() is the "hide everywhere" shortcut.
    if !parsed.explicit {
        return Exclusion::hide_everywhere();
    }

    let directive = compile_hide(parsed.set);
    if directive == Exclusion::None {
        report.warnings.push(Warning {
            code: W_VACUOUS_HIDE.to_string(),
            model: model_name.to_string(),
            field: field_name.to_string(),
            message: "hide annotation with explicit arguments resolves to no contexts; \
                      field left unchanged"
                .to_string(),
        });
    }
    directive
}

fn warn_unknown_contexts(
    unknown: &[String],
    model_name: &str,
    field_name: &str,
    report: &mut Report,
) {
    for name in unknown {
        report.warnings.push(Warning {
            code: W_UNKNOWN_CONTEXT.to_string(),
            model: model_name.to_string(),
            field: field_name.to_string(),
            message: format!(
                "unknown context \"{}\" (expected one of: {})",
                name,
                VALID_CONTEXTS.join(", ")
            ),
        });
    }
}
