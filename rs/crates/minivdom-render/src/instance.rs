use minivdom_core::{merge, ComponentRef, Props, RenderResult, Scope, Value};
use tracing::debug;

use crate::container::Container;
use crate::mount::Mounter;
use crate::node::instantiate;
use crate::options::RenderOptions;

/// A component record: the logic plus the props, context and state it
/// renders from.
///
/// Between updates the instance is idle (`next_state` is `None`).
/// [`Instance::set_state`] makes it pending and immediately flushes through
/// [`Instance::update_component`]; there is no batching. Every update
/// re-renders and re-mounts from scratch.
#[derive(Debug)]
pub struct Instance {
    component: ComponentRef,
    props: Props,
    context: Value,
    state: Props,
    next_state: Option<Props>,
    options: RenderOptions,
    container: Option<Container>,
    root_id: u32,
}

impl Instance {
    pub fn new(component: ComponentRef, props: Props, context: Value) -> Self {
        let state = component.initial_state(&props);
        Instance {
            component,
            props,
            context,
            state,
            next_state: None,
            options: RenderOptions::default(),
            container: None,
            root_id: 0,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn context(&self) -> &Value {
        &self.context
    }

    pub fn state(&self) -> &Props {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.next_state.is_some()
    }

    /// Container that updates are written back into, once mounted into one.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Run the component's render logic against the current state.
    pub fn render(&self) -> RenderResult<Value> {
        let scope = Scope {
            props: &self.props,
            state: &self.state,
            context: &self.context,
        };
        self.component.render(&scope)
    }

    /// Render, dispatch and mount the output starting at position id `id`.
    pub fn mount(&self, id: u32) -> RenderResult<String> {
        let rendered = self.render()?;
        let node = instantiate(&rendered)?;
        Mounter::new(&self.options, id, &self.context).mount_to_string(&node, id)
    }

    /// Mount into `container` and remember it, so later updates replace its
    /// content. The container is only written once the full markup exists.
    pub fn mount_into(&mut self, container: &Container, id: u32) -> RenderResult<()> {
        let markup = self.mount(id)?;
        debug!(component = self.component.name(), id, bytes = markup.len(), "writing container");
        container.set_inner_html(markup);
        self.container = Some(container.clone());
        self.root_id = id;
        Ok(())
    }

    /// Merge `partial` over a copy of the current state and flush it.
    /// Returns the freshly mounted markup.
    pub fn set_state(&mut self, partial: Props) -> RenderResult<String> {
        self.next_state = Some(merge(&self.state, partial));
        debug!(component = self.component.name(), "state pending");
        self.update_component()
    }

    /// Swap in the pending state (if any), then re-render and re-mount.
    ///
    /// The state swap sticks even if rendering fails; the container is only
    /// written on success.
    pub fn update_component(&mut self) -> RenderResult<String> {
        if let Some(next) = self.next_state.take() {
            self.state = next;
        }
        let markup = self.mount(self.root_id)?;
        if let Some(container) = &self.container {
            debug!(component = self.component.name(), bytes = markup.len(), "re-render written");
            container.set_inner_html(markup.clone());
        }
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minivdom_core::{create_element, props, Component, FnComponent, RenderError};

    fn counter() -> ComponentRef {
        FnComponent::new("Counter", |scope| Ok(scope.state("count").clone()))
            .with_initial_state(|_| props([("count", 0)]))
            .into_ref()
    }

    #[test]
    fn test_initial_state_and_idle() {
        let inst = Instance::new(counter(), Props::new(), Value::Null);
        assert_eq!(inst.state()["count"], Value::from(0));
        assert!(!inst.is_pending());
        assert_eq!(inst.mount(0).unwrap(), "0");
    }

    #[test]
    fn test_set_state_rerenders_with_new_state() {
        let mut inst = Instance::new(counter(), Props::new(), Value::Null);
        let markup = inst.set_state(props([("count", 1)])).unwrap();
        assert_eq!(markup, "1");
        assert_eq!(inst.render().unwrap(), Value::from(1));
        assert!(!inst.is_pending());
    }

    #[test]
    fn test_set_state_merges_shallowly() {
        let c = FnComponent::new("Pair", |scope| {
            Ok(Value::from(format!("{}-{}", scope.state("a"), scope.state("b"))))
        })
        .with_initial_state(|_| props([("a", 1), ("b", 2)]))
        .into_ref();
        let mut inst = Instance::new(c, Props::new(), Value::Null);
        assert_eq!(inst.set_state(props([("b", 5)])).unwrap(), "1-5");
        assert_eq!(inst.set_state(props([("a", 9)])).unwrap(), "9-5");
    }

    #[test]
    fn test_update_written_back_into_container() {
        let c = FnComponent::new("Clicks", |scope| {
            Ok(create_element(
                "button",
                Some(props([("class", scope.prop("class").clone())])),
                vec![scope.state("clicks").clone()],
            ))
        })
        .with_initial_state(|_| props([("clicks", 0)]))
        .into_ref();

        let container = Container::new();
        let mut inst = Instance::new(c, props([("class", "btn")]), Value::Null);
        inst.mount_into(&container, 0).unwrap();
        assert_eq!(container.inner_html(), "<button class=\"btn\" data-reactid=0>0</button>");

        inst.set_state(props([("clicks", 2)])).unwrap();
        assert_eq!(container.inner_html(), "<button class=\"btn\" data-reactid=0>2</button>");
        assert!(inst.container().unwrap().same(&container));
    }

    #[test]
    fn test_failed_update_leaves_container_untouched() {
        let c = FnComponent::new("Fragile", |scope| match scope.state("ok") {
            Value::Bool(true) => Ok(Value::from("fine")),
            _ => Ok(Value::Undefined),
        })
        .with_initial_state(|_| props([("ok", true)]))
        .into_ref();

        let container = Container::new();
        let mut inst = Instance::new(c, Props::new(), Value::Null);
        inst.mount_into(&container, 0).unwrap();
        assert!(inst.set_state(props([("ok", false)])).is_err());
        assert_eq!(container.inner_html(), "fine");
        assert_eq!(inst.state()["ok"], Value::Bool(false));
    }

    #[test]
    fn test_context_reaches_render() {
        let c = FnComponent::new("Themed", |scope| Ok(scope.context.clone())).into_ref();
        let inst = Instance::new(c.clone(), props([("size", 2)]), Value::from("dark"));
        assert_eq!(inst.mount(0).unwrap(), "dark");
        assert_eq!(inst.component(), &c);
        assert_eq!(inst.component().name(), "Themed");
        assert_eq!(inst.props()["size"], Value::from(2));
        assert_eq!(inst.context(), &Value::from("dark"));
    }

    #[test]
    fn test_missing_render() {
        struct NoRender;
        impl Component for NoRender {
            fn name(&self) -> &str {
                "NoRender"
            }
        }

        let inst = Instance::new(ComponentRef::new(NoRender), Props::new(), Value::Null);
        assert_eq!(
            inst.mount(0),
            Err(RenderError::MissingRender { component: "NoRender".into() })
        );
    }
}
