use std::fmt;

use crate::value::Value;

/// Coarse runtime kind of a [`Value`], used to drive dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Function,
    Array,
    /// Anything else: plain objects and elements.
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Function => "function",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total and side-effect free.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Undefined => Kind::Undefined,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Component(_) => Kind::Function,
        Value::Array(_) => Kind::Array,
        Value::Object(_) | Value::Element(_) => Kind::Object,
    }
}
