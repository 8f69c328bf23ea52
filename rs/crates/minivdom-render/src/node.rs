use std::borrow::Cow;

use minivdom_core::{
    classify, format_number, ComponentRef, ElementType, Props, RenderError, RenderResult, Value,
};

use crate::mount::Mounter;
use crate::options::RenderOptions;

/// Runtime wrapper around exactly one value of a description tree.
///
/// Nodes borrow from the value they were instantiated from; mounting a
/// composite renders a fresh description and instantiates that in turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// `null` or `false`.
    Empty,
    /// A string, or a number already converted to decimal text.
    Text(Cow<'a, str>),
    Tagged(Tagged<'a>),
    Composite(Composite<'a>),
}

/// Host element with its lower-cased tag name.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<'a> {
    pub tag: String,
    pub props: &'a Props,
}

/// Element whose type is user-defined component logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<'a> {
    pub component: &'a ComponentRef,
    pub props: &'a Props,
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Empty => "empty",
            Node::Text(_) => "text",
            Node::Tagged(_) => "tagged",
            Node::Composite(_) => "composite",
        }
    }

    /// Mount with default options, starting at position id `id`.
    pub fn mount(&self, id: u32) -> RenderResult<String> {
        self.mount_with(id, &RenderOptions::default())
    }

    pub fn mount_with(&self, id: u32, options: &RenderOptions) -> RenderResult<String> {
        Mounter::new(options, id, &Value::Null).mount_to_string(self, id)
    }
}

/// Map a value to the node variant that renders it.
pub fn instantiate(value: &Value) -> RenderResult<Node<'_>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(Node::Empty),
        Value::String(s) => Ok(Node::Text(Cow::Borrowed(s.as_str()))),
        Value::Number(n) => Ok(Node::Text(Cow::Owned(format_number(*n)))),
        Value::Element(desc) => match &desc.ty {
            ElementType::Tag(tag) if tag.is_empty() => Err(RenderError::unsupported(
                classify(value),
                "element has an empty tag name",
            )),
            ElementType::Tag(tag) => Ok(Node::Tagged(Tagged {
                tag: tag.to_lowercase(),
                props: &desc.props,
            })),
            ElementType::Component(component) => Ok(Node::Composite(Composite {
                component,
                props: &desc.props,
            })),
        },
        other => Err(RenderError::unsupported(classify(other), unsupported_detail(other))),
    }
}

fn unsupported_detail(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined cannot be rendered",
        Value::Bool(_) => "only `false` renders as empty",
        Value::Component(_) => "a component must be wrapped in an element to render",
        Value::Array(_) => "arrays are only valid as children",
        _ => "object has no usable `type`",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minivdom_core::{component_fn, create_element, props, Kind};

    #[test]
    fn test_empty_values() {
        for v in [Value::Null, Value::Bool(false)] {
            let node = instantiate(&v).unwrap();
            assert_eq!(node, Node::Empty);
            assert_eq!(node.mount(0).unwrap(), "");
            assert_eq!(node.mount(17).unwrap(), "");
        }
    }

    #[test]
    fn test_primitives_mount_as_text() {
        let cases = [
            (Value::from("hello"), "hello"),
            (Value::from(""), ""),
            (Value::from(0), "0"),
            (Value::from(42), "42"),
            (Value::from(-3.25), "-3.25"),
        ];
        for (v, expected) in cases {
            let node = instantiate(&v).unwrap();
            assert_eq!(node.kind(), "text");
            assert_eq!(node.mount(5).unwrap(), expected);
        }
    }

    #[test]
    fn test_tag_is_lowercased() {
        let el = create_element("DIV", None, vec![]);
        match instantiate(&el).unwrap() {
            Node::Tagged(t) => assert_eq!(t.tag, "div"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_component_type_is_composite() {
        let comp = component_fn("Hello", |_| Ok(Value::from("hi")));
        let el = create_element(&comp, Some(props([("name", "Amy")])), vec![]);
        match instantiate(&el).unwrap() {
            Node::Composite(c) => {
                assert_eq!(c.component, &comp);
                assert_eq!(c.props["name"], Value::from("Amy"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_shapes() {
        let comp = component_fn("Bare", |_| Ok(Value::Null));
        let cases = [
            (Value::Undefined, Kind::Undefined),
            (Value::Bool(true), Kind::Boolean),
            (Value::Component(comp), Kind::Function),
            (Value::Array(vec![]), Kind::Array),
            (Value::Object(props([("id", "x")])), Kind::Object),
            (create_element("", None, vec![]), Kind::Object),
        ];
        for (v, expected) in cases {
            match instantiate(&v) {
                Err(RenderError::Unsupported { kind, .. }) => assert_eq!(kind, expected),
                other => panic!("expected unsupported for {:?}, got {:?}", v, other),
            }
        }
    }
}
