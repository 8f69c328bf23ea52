use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use crate::description::{Description, ElementType};
use crate::value::{Props, Value};

/// Objects with a string `type` become elements (`props` optional and must
/// be an object); every other object stays a plain object.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(mut map) => {
                let props_ok =
                    matches!(map.get("props"), None | Some(Json::Null) | Some(Json::Object(_)));
                let tag = match map.get("type") {
                    Some(Json::String(tag)) if props_ok => tag.clone(),
                    _ => return Value::Object(object_props(map)),
                };
                let props = match map.remove("props") {
                    Some(Json::Object(p)) => object_props(p),
                    _ => Props::new(),
                };
                Value::Element(Box::new(Description::new(ElementType::Tag(tag), props)))
            }
        }
    }
}

fn object_props(map: serde_json::Map<String, Json>) -> Props {
    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Json::deserialize(deserializer).map(Value::from)
    }
}

/// Parse a description tree from a JSON string
pub fn parse_description(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}
