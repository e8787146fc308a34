use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// JSON type of a value, used to describe coercions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ValueShape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueShape::Null,
            Value::Bool(_) => ValueShape::Bool,
            Value::Number(_) => ValueShape::Number,
            Value::String(_) => ValueShape::String,
            Value::Array(_) => ValueShape::Array,
            Value::Object(_) => ValueShape::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueShape::Null => "null",
            ValueShape::Bool => "bool",
            ValueShape::Number => "number",
            ValueShape::String => "string",
            ValueShape::Array => "array",
            ValueShape::Object => "object",
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
