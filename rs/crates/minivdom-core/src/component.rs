use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::error::{RenderError, RenderResult};
use crate::value::{Props, Value};

/// Everything render logic may read: the instance's props, its current
/// state and the context inherited from the enclosing render.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub props: &'a Props,
    pub state: &'a Props,
    pub context: &'a Value,
}

impl<'a> Scope<'a> {
    pub fn prop(&self, name: &str) -> &'a Value {
        self.props.get(name).unwrap_or(&Value::Undefined)
    }

    pub fn state(&self, name: &str) -> &'a Value {
        self.state.get(name).unwrap_or(&Value::Undefined)
    }
}

/// User-defined component logic.
///
/// Implementors supply `render`; the instance owning props and state is
/// managed by the renderer and handed in through [`Scope`]. A component
/// that does not override `render` fails with
/// [`RenderError::MissingRender`] when mounted.
pub trait Component {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// State a fresh instance starts with.
    fn initial_state(&self, _props: &Props) -> Props {
        Props::new()
    }

    /// Produce the description this component renders as. Must be a pure
    /// function of the scope.
    fn render(&self, _scope: &Scope<'_>) -> RenderResult<Value> {
        Err(RenderError::MissingRender {
            component: self.name().to_string(),
        })
    }
}

/// Shared handle to component logic; this is the value stored in an
/// element's type. Two handles are equal when they point at the same logic.
#[derive(Clone)]
pub struct ComponentRef(Rc<dyn Component>);

impl ComponentRef {
    pub fn new<C: Component + 'static>(component: C) -> Self {
        ComponentRef(Rc::new(component))
    }
}

impl Deref for ComponentRef {
    type Target = dyn Component;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.0.name()).finish()
    }
}

type RenderFn = dyn Fn(&Scope<'_>) -> RenderResult<Value>;
type StateFn = dyn Fn(&Props) -> Props;

/// Component built from closures.
pub struct FnComponent {
    name: String,
    render: Box<RenderFn>,
    initial_state: Option<Box<StateFn>>,
}

impl FnComponent {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Scope<'_>) -> RenderResult<Value> + 'static,
    {
        FnComponent {
            name: name.into(),
            render: Box::new(render),
            initial_state: None,
        }
    }

    pub fn with_initial_state<F>(mut self, init: F) -> Self
    where
        F: Fn(&Props) -> Props + 'static,
    {
        self.initial_state = Some(Box::new(init));
        self
    }

    pub fn into_ref(self) -> ComponentRef {
        ComponentRef::new(self)
    }
}

impl Component for FnComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn initial_state(&self, props: &Props) -> Props {
        match &self.initial_state {
            Some(init) => init(props),
            None => Props::new(),
        }
    }

    fn render(&self, scope: &Scope<'_>) -> RenderResult<Value> {
        (self.render)(scope)
    }
}

/// Shorthand for a stateless closure component.
pub fn component_fn<F>(name: impl Into<String>, render: F) -> ComponentRef
where
    F: Fn(&Scope<'_>) -> RenderResult<Value> + 'static,
{
    FnComponent::new(name, render).into_ref()
}
