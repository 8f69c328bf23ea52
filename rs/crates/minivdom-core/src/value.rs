use std::fmt;

use indexmap::IndexMap;

use crate::component::ComponentRef;
use crate::description::Description;

/// Ordered property map. Iteration follows insertion order, which is also
/// the order attributes and style entries are emitted in.
pub type Props = IndexMap<String, Value>;

/// Any value that can appear in a description tree: as a child, as a prop
/// value, or as the root handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Reference to user-defined component logic.
    Component(ComponentRef),
    Array(Vec<Value>),
    /// Plain object without a usable `type`.
    Object(Props),
    Element(Box<Description>),
}

impl Value {
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Props> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Description> {
        match self {
            Value::Element(desc) => Some(desc),
            _ => None,
        }
    }
}

/// String coercion used for text, attribute values and style values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Component(c) => f.write_str(c.name()),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) | Value::Element(_) => f.write_str("[object Object]"),
        }
    }
}

/// Decimal text for a number: integral values print without a fractional
/// part, magnitudes from 1e21 up and below 1e-6 use exponent form, and
/// non-finite values print as `NaN` / `Infinity` / `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        // exponent form with an explicit sign: 1e+21, 1.5e-7
        let text = format!("{:e}", n);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    // shortest round-trip digits; integral values carry no fractional part
    format!("{}", n)
}

/// Build a [`Props`] map from key/value pairs, keeping their order.
pub fn props<I, K, V>(pairs: I) -> Props
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Shallow merge: a copy of `base` with every entry of `partial` written
/// over it. Existing keys keep their position, new keys are appended.
pub fn merge(base: &Props, partial: Props) -> Props {
    let mut next = base.clone();
    next.extend(partial);
    next
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Props> for Value {
    fn from(map: Props) -> Self {
        Value::Object(map)
    }
}

impl From<Description> for Value {
    fn from(desc: Description) -> Self {
        Value::Element(Box::new(desc))
    }
}

impl From<ComponentRef> for Value {
    fn from(c: ComponentRef) -> Self {
        Value::Component(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
