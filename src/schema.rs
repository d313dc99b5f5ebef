//! External schema model and JSON loading.
//!
//! The compiler treats the schema tree through a narrow contract: per field
//! it reads the name, the declared type, the attribute list, and appends to
//! the comment list. Documents are plain JSON; key order is preserved on
//! the way through so annotation passes are byte-reproducible.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;

/// A parsed datamodel document: model declarations plus enum declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,
    /// Enum declarations. Fields typed by an enum are non-relations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumDecl>,
}

/// A model declaration with its fields in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// An enum declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// A field declaration.
///
/// `field_type` holds the declared type name; a field is a relation exactly
/// when that name resolves to a model declaration in the same document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Ordered comment lines attached to the field. The orchestrator
    /// appends at most one directive here, idempotently.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// An attribute invocation on a field, e.g. `show(query: true)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
}

/// A single named argument of an attribute invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    pub value: Literal,
}

/// An attribute argument literal.
///
/// Only boolean literals carry meaning for visibility annotations; anything
/// else is kept as an opaque value and treated like absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Other(Value),
}

/// Load a datamodel from a file path.
///
/// # Errors
///
/// Returns `SchemaError::FileNotFound` if the file doesn't exist,
/// `SchemaError::ReadError` on IO failure, or `SchemaError::InvalidJson`
/// if the content isn't a valid datamodel document.
pub fn load_datamodel(path: &Path) -> Result<Datamodel, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_datamodel_str(&content)
}

/// Load a datamodel from a JSON string.
///
/// # Errors
///
/// Returns `SchemaError::InvalidJson` if the string isn't a valid
/// datamodel document.
pub fn load_datamodel_str(content: &str) -> Result<Datamodel, SchemaError> {
    serde_json::from_str(content).map_err(|source| SchemaError::InvalidJson { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_minimal_document() {
        let dm = load_datamodel_str(
            r#"{
                "models": [
                    {
                        "name": "User",
                        "fields": [
                            { "name": "id", "type": "String" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dm.models.len(), 1);
        assert_eq!(dm.models[0].fields[0].name, "id");
        assert!(dm.models[0].fields[0].attributes.is_empty());
        assert!(dm.models[0].fields[0].comments.is_empty());
    }

    #[test]
    fn load_attribute_arguments() {
        let dm = load_datamodel_str(
            r#"{
                "models": [
                    {
                        "name": "User",
                        "fields": [
                            {
                                "name": "password",
                                "type": "String",
                                "attributes": [
                                    {
                                        "name": "hide",
                                        "args": [
                                            { "name": "query", "value": true },
                                            { "name": "level", "value": 3 }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let attr = &dm.models[0].fields[0].attributes[0];
        assert_eq!(attr.name, "hide");
        assert_eq!(attr.args[0].value, Literal::Boolean(true));
        assert!(matches!(attr.args[1].value, Literal::Other(_)));
    }

    #[test]
    fn load_invalid_json() {
        let result = load_datamodel_str("{ not json");
        assert!(matches!(result, Err(SchemaError::InvalidJson { .. })));
    }

    #[test]
    fn load_missing_file() {
        let result = load_datamodel(Path::new("/nonexistent/model.json"));
        assert!(matches!(result, Err(SchemaError::FileNotFound { .. })));
    }

    #[test]
    fn roundtrip_preserves_comments() {
        let input = r#"{"models":[{"name":"User","fields":[{"name":"id","type":"String","comments":["/// primary key"]}]}]}"#;
        let dm = load_datamodel_str(input).unwrap();
        let output = serde_json::to_string(&dm).unwrap();
        assert_eq!(input, output);
    }
}
