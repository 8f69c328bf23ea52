use crate::component::ComponentRef;
use crate::value::{Props, Value};

/// Reserved prop holding nested descriptions.
pub const CHILDREN: &str = "children";

/// What a description renders as: a host element named by tag, or
/// user-defined component logic.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Tag(String),
    Component(ComponentRef),
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Tag(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Tag(tag)
    }
}

impl From<ComponentRef> for ElementType {
    fn from(c: ComponentRef) -> Self {
        ElementType::Component(c)
    }
}

impl From<&ComponentRef> for ElementType {
    fn from(c: &ComponentRef) -> Self {
        ElementType::Component(c.clone())
    }
}

/// Immutable declarative node: a type plus its props. Children live under
/// the reserved `children` prop.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub ty: ElementType,
    pub props: Props,
}

impl Description {
    pub fn new(ty: impl Into<ElementType>, props: Props) -> Self {
        Description { ty: ty.into(), props }
    }

    /// The `children` prop, if present.
    pub fn children(&self) -> Option<&Value> {
        self.props.get(CHILDREN)
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.ty {
            ElementType::Tag(tag) => Some(tag),
            ElementType::Component(_) => None,
        }
    }
}

/// Build an element value the way a "create element" factory does.
///
/// A single child is stored directly under `children`, several children as
/// an array. With no children the key is left as the caller supplied it.
pub fn create_element(
    ty: impl Into<ElementType>,
    props: Option<Props>,
    children: Vec<Value>,
) -> Value {
    let mut props = props.unwrap_or_default();
    let mut children = children;
    match children.len() {
        0 => {}
        1 => {
            props.insert(CHILDREN.to_string(), children.remove(0));
        }
        _ => {
            props.insert(CHILDREN.to_string(), Value::Array(children));
        }
    }
    Value::Element(Box::new(Description::new(ty, props)))
}
