//! Schema derivation and argument validation.
//!
//! A tool's input schema is derived from its parameter struct and serves two
//! purposes: it is advertised verbatim by `list_tools`, and it is what
//! incoming arguments are checked against before a handler runs.
//!
//! Validation is total: it never panics, never mutates the input, and
//! reports every violation it finds rather than stopping at the first, so a
//! caller can fix their request in one round trip.

use jsonschema::{Draft, JSONSchema};
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde_json::Value;
use std::sync::Arc;

use super::error::ToolError;

/// Produce the declarative input schema for a parameter type.
///
/// Deterministic: the same type always yields the same description. The
/// result is shared, so repeated listings advertise identical schemas.
pub fn schema_for<P: JsonSchema + 'static>() -> Arc<JsonObject> {
    cached_schema_for_type::<P>()
}

/// Validate raw arguments against a tool's declared input schema.
///
/// Returns `Ok(())` when the arguments conform, or `InvalidArguments`
/// aggregating every field-level violation. Each violation is rendered as
/// `<json-pointer>: <message>` when the instance path is non-empty.
pub fn validate(schema: &JsonObject, arguments: &JsonObject) -> Result<(), ToolError> {
    let schema_value = Value::Object(schema.clone());
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema_value)
        .map_err(|e| ToolError::internal(format!("input schema did not compile: {e}")))?;

    let instance = Value::Object(arguments.clone());
    if let Err(errors) = compiled.validate(&instance) {
        let violations: Vec<String> = errors
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();
        return Err(ToolError::invalid_arguments(violations.join("; ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::Map;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct SampleParams {
        /// A required string field.
        pub input: String,

        /// A required integer field.
        pub count: u32,

        /// An optional flag.
        #[serde(default)]
        pub verbose: Option<bool>,
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_valid_arguments_pass() {
        let schema = schema_for::<SampleParams>();
        let result = validate(&schema, &args(serde_json::json!({"input": "hi", "count": 2})));
        assert!(result.is_ok());
    }

    #[test]
    fn test_optional_field_may_be_absent_or_present() {
        let schema = schema_for::<SampleParams>();
        assert!(validate(&schema, &args(serde_json::json!({"input": "a", "count": 0}))).is_ok());
        assert!(
            validate(
                &schema,
                &args(serde_json::json!({"input": "a", "count": 0, "verbose": true}))
            )
            .is_ok()
        );
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let schema = schema_for::<SampleParams>();
        let err = validate(&schema, &args(serde_json::json!({"count": 1}))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid arguments:"), "got: {msg}");
        assert!(msg.contains("input"), "got: {msg}");
    }

    #[test]
    fn test_all_violations_are_collected() {
        // Both the missing field and the wrong-typed field must appear.
        let schema = schema_for::<SampleParams>();
        let err = validate(&schema, &args(serde_json::json!({"count": "three"}))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("input"), "got: {msg}");
        assert!(msg.contains("count"), "got: {msg}");
    }

    #[test]
    fn test_wrong_type_is_reported_with_path() {
        let schema = schema_for::<SampleParams>();
        let err = validate(
            &schema,
            &args(serde_json::json!({"input": 42, "count": 1})),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/input"), "got: {err}");
    }

    #[test]
    fn test_validation_does_not_mutate_input() {
        let schema = schema_for::<SampleParams>();
        let arguments = args(serde_json::json!({"count": "three"}));
        let snapshot = arguments.clone();
        let _ = validate(&schema, &arguments);
        assert_eq!(arguments, snapshot);
    }

    #[test]
    fn test_schema_description_is_deterministic() {
        let first = schema_for::<SampleParams>();
        let second = schema_for::<SampleParams>();
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let schema = Map::new();
        assert!(validate(&schema, &args(serde_json::json!({"whatever": 1}))).is_ok());
    }
}
