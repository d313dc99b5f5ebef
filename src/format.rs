//! Directive rendering into the external `@HideField` comment syntax.
//!
//! The downstream hiding mechanism consumes the directive byte-for-byte;
//! the shapes here are a fixed external format.

use crate::types::Exclusion;

/// Marker identifying a rendered directive in an existing comment list.
/// Used for the idempotence check before attaching.
pub const HIDE_FIELD_MARKER: &str = "@HideField(";

/// Render a directive as a comment line, or `None` when no directive is
/// to be emitted at all.
///
/// `Pattern` expressions holding more than one fragment are wrapped in the
/// `@(...)` alternation syntax; a single fragment is emitted bare. `Simple`
/// renders only the keys that are defined.
pub fn render(directive: &Exclusion) -> Option<String> {
    match directive {
        Exclusion::None => None,

        Exclusion::Simple { input, output } => {
            let mut keys = Vec::new();
            if let Some(input) = input {
                keys.push(format!("input: {input}"));
            }
            if let Some(output) = output {
                keys.push(format!("output: {output}"));
            }
            if keys.is_empty() {
                // A Simple with neither side defined excludes nothing.
                return None;
            }
            Some(format!("/// @HideField({{ {} }})", keys.join(", ")))
        }

        Exclusion::Pattern { expression } => {
            let pattern = if expression.contains('|') {
                format!("@({expression})")
            } else {
                expression.clone()
            };
            Some(format!("/// @HideField({{ match: '{pattern}' }})"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_none_emits_nothing() {
        assert_eq!(render(&Exclusion::None), None);
    }

    #[test]
    fn render_simple_both_keys() {
        let directive = Exclusion::hide_everywhere();
        assert_eq!(
            render(&directive).unwrap(),
            "/// @HideField({ input: true, output: true })"
        );
    }

    #[test]
    fn render_simple_false_values() {
        let directive = Exclusion::hide_output();
        assert_eq!(
            render(&directive).unwrap(),
            "/// @HideField({ input: false, output: true })"
        );
    }

    #[test]
    fn render_simple_single_key() {
        let directive = Exclusion::Simple {
            input: None,
            output: Some(true),
        };
        assert_eq!(render(&directive).unwrap(), "/// @HideField({ output: true })");

        let directive = Exclusion::Simple {
            input: Some(true),
            output: None,
        };
        assert_eq!(render(&directive).unwrap(), "/// @HideField({ input: true })");
    }

    #[test]
    fn render_simple_undefined_emits_nothing() {
        let directive = Exclusion::Simple {
            input: None,
            output: None,
        };
        assert_eq!(render(&directive), None);
    }

    #[test]
    fn render_single_fragment_bare() {
        let directive = Exclusion::Pattern {
            expression: "*(*Create*Input)".to_string(),
        };
        assert_eq!(
            render(&directive).unwrap(),
            "/// @HideField({ match: '*(*Create*Input)' })"
        );
    }

    #[test]
    fn render_alternation_wrapped() {
        let directive = Exclusion::Pattern {
            expression: "*(Where*Input)|*(*Create*Input)|*(*Update*Input)".to_string(),
        };
        assert_eq!(
            render(&directive).unwrap(),
            "/// @HideField({ match: '@(*(Where*Input)|*(*Create*Input)|*(*Update*Input))' })"
        );
    }
}
