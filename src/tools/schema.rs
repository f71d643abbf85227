//! Static parameter-schema tables: built once per tool, validated locally
//! before every dispatch rather than trusting provider strict mode alone.

use serde_json::{json, Map, Value};

use crate::error::{CoinsageError, Result};

/// JSON-primitive type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldType {
    fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
    description: String,
    required: bool,
    allowed: Option<Vec<String>>,
}

/// A flat mapping of named fields to primitive types.
///
/// Every field the model may send must be declared here; dispatch rejects
/// payloads carrying anything else.
#[derive(Debug, Clone, Default)]
pub struct ParamSchema {
    fields: Vec<FieldSpec>,
}

impl ParamSchema {
    /// Start building a schema.
    pub fn object() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// A schema declaring no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render as a strict-mode JSON Schema.
    ///
    /// Strict mode lists every field under `required` and widens optional
    /// fields to accept `null`, which is why callers may send explicit nulls
    /// for unused fields; `additionalProperties: false` forbids anything
    /// undeclared.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            properties.insert(field.name.clone(), field_to_json(field));
            required.push(Value::String(field.name.clone()));
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Validate a decoded argument payload against this table.
    ///
    /// Checks, in order: no undeclared top-level fields, every
    /// domain-required field present, and every supplied value of the
    /// declared type (null allowed for optional fields) and within the
    /// enumerated set where one is declared.
    pub fn validate(&self, tool: &str, args: &Map<String, Value>) -> Result<()> {
        for key in args.keys() {
            if !self.fields.iter().any(|f| &f.name == key) {
                return Err(CoinsageError::InvalidParameter {
                    tool: tool.to_string(),
                    message: format!("undeclared field '{key}'"),
                });
            }
        }

        for field in &self.fields {
            let value = args.get(&field.name);
            match value {
                None => {
                    if field.required {
                        return Err(CoinsageError::MissingParameter {
                            tool: tool.to_string(),
                            parameter: field.name.clone(),
                        });
                    }
                }
                Some(Value::Null) => {
                    if field.required {
                        return Err(CoinsageError::MissingParameter {
                            tool: tool.to_string(),
                            parameter: field.name.clone(),
                        });
                    }
                }
                Some(value) => {
                    if !field.field_type.matches(value) {
                        return Err(CoinsageError::InvalidParameter {
                            tool: tool.to_string(),
                            message: format!(
                                "field '{}' expected type '{}'",
                                field.name,
                                field.field_type.as_str()
                            ),
                        });
                    }
                    if let Some(allowed) = &field.allowed {
                        let matches = value
                            .as_str()
                            .map(|s| allowed.iter().any(|a| a == s))
                            .unwrap_or(false);
                        if !matches {
                            return Err(CoinsageError::InvalidParameter {
                                tool: tool.to_string(),
                                message: format!(
                                    "field '{}' must be one of [{}]",
                                    field.name,
                                    allowed.join(", ")
                                ),
                            });
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn field_to_json(field: &FieldSpec) -> Value {
    let base = field.field_type.as_str();
    match (&field.allowed, field.required) {
        (None, true) => json!({
            "type": base,
            "description": field.description,
        }),
        (None, false) => json!({
            "type": [base, "null"],
            "description": field.description,
        }),
        (Some(values), true) => json!({
            "type": base,
            "enum": values,
            "description": field.description,
        }),
        (Some(values), false) => json!({
            "anyOf": [
                {"type": base, "enum": values},
                {"type": "null"},
            ],
            "description": field.description,
        }),
    }
}

/// Builder for [`ParamSchema`].
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    fn push(
        mut self,
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
        required: bool,
        allowed: Option<Vec<String>>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
            description: description.into(),
            required,
            allowed,
        });
        self
    }

    pub fn string(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.push(name, FieldType::String, description, required, None)
    }

    pub fn integer(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.push(name, FieldType::Integer, description, required, None)
    }

    pub fn number(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.push(name, FieldType::Number, description, required, None)
    }

    pub fn boolean(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.push(name, FieldType::Boolean, description, required, None)
    }

    pub fn string_enum(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        values: &[&str],
        required: bool,
    ) -> Self {
        let allowed = values.iter().map(|v| v.to_string()).collect();
        self.push(name, FieldType::String, description, required, Some(allowed))
    }

    pub fn build(self) -> ParamSchema {
        ParamSchema { fields: self.fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn to_json_lists_every_field_as_required() {
        let schema = ParamSchema::object()
            .string("symbol", "Ticker symbol", true)
            .integer("limit", "Result cap", false)
            .build();

        let json = schema.to_json();
        assert_eq!(json["type"], "object");
        assert_eq!(json["additionalProperties"], false);
        assert_eq!(json["required"], json!(["symbol", "limit"]));
        assert_eq!(json["properties"]["symbol"]["type"], "string");
        assert_eq!(json["properties"]["limit"]["type"], json!(["integer", "null"]));
    }

    #[test]
    fn optional_enum_renders_any_of_with_null() {
        let schema = ParamSchema::object()
            .string_enum("sort_dir", "Sort direction", &["asc", "desc"], false)
            .build();

        let json = schema.to_json();
        let any_of = json["properties"]["sort_dir"]["anyOf"].as_array().unwrap();
        assert_eq!(any_of.len(), 2);
        assert_eq!(any_of[0]["enum"], json!(["asc", "desc"]));
        assert_eq!(any_of[1]["type"], "null");
    }

    #[test]
    fn rejects_undeclared_field() {
        let schema = ParamSchema::object().string("symbol", "Ticker", true).build();
        let err = schema
            .validate("quotes_latest", &args(json!({"symbol": "BTC", "bogus": 1})))
            .unwrap_err();
        assert!(matches!(err, CoinsageError::InvalidParameter { .. }));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn missing_required_field_is_missing_parameter() {
        let schema = ParamSchema::object().string("query", "Prompt", true).build();
        let err = schema.validate("market_data_agent", &args(json!({}))).unwrap_err();
        match err {
            CoinsageError::MissingParameter { tool, parameter } => {
                assert_eq!(tool, "market_data_agent");
                assert_eq!(parameter, "query");
            }
            other => panic!("expected MissingParameter, got {other}"),
        }
    }

    #[test]
    fn null_for_required_field_is_missing_parameter() {
        let schema = ParamSchema::object().string("query", "Prompt", true).build();
        let err = schema
            .validate("web_search_agent", &args(json!({"query": null})))
            .unwrap_err();
        assert!(matches!(err, CoinsageError::MissingParameter { .. }));
    }

    #[test]
    fn null_for_optional_field_passes() {
        let schema = ParamSchema::object()
            .string("symbol", "Ticker", true)
            .integer("limit", "Cap", false)
            .build();
        schema
            .validate("quotes_latest", &args(json!({"symbol": "ETH", "limit": null})))
            .unwrap();
    }

    #[test]
    fn wrong_type_is_invalid_parameter() {
        let schema = ParamSchema::object().integer("start", "Offset", false).build();
        let err = schema
            .validate("categories", &args(json!({"start": "one"})))
            .unwrap_err();
        assert!(matches!(err, CoinsageError::InvalidParameter { .. }));
    }

    #[test]
    fn value_outside_enum_is_invalid_parameter() {
        let schema = ParamSchema::object()
            .string_enum("sort", "Sort field", &["cmc_rank", "id"], false)
            .build();
        let err = schema
            .validate("id_map", &args(json!({"sort": "volume"})))
            .unwrap_err();
        assert!(err.to_string().contains("cmc_rank"));
    }

    #[test]
    fn number_field_accepts_integers() {
        let schema = ParamSchema::object().number("price_min", "Floor", false).build();
        schema
            .validate("listings_latest", &args(json!({"price_min": 10})))
            .unwrap();
        schema
            .validate("listings_latest", &args(json!({"price_min": 10.5})))
            .unwrap();
    }
}
