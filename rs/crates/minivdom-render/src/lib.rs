//! minivdom-render — Mount minivdom description trees to markup strings
//!
//! A description is dispatched to one of four node variants (empty, text,
//! tagged, composite) and mounted recursively. Composite nodes run their
//! component's render logic and mount whatever it returns in their place.
//! Tagged nodes carry a position-id attribute for the client side.

mod container;
mod instance;
mod mount;
mod node;
mod options;

pub use container::Container;
pub use instance::Instance;
pub use node::{instantiate, Composite, Node, Tagged};
pub use options::{IdStrategy, RenderOptions, DATA_ATTR_ID};

pub use minivdom_core::{ComponentRef, Props, RenderError, RenderResult, Value};

use mount::Mounter;
use tracing::debug_span;

/// Render entry point carrying options, a starting position id and the
/// context value inherited by every component mounted below the root.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
    context: Value,
    start_id: u32,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer {
            options,
            ..Renderer::default()
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    pub fn with_start_id(mut self, id: u32) -> Self {
        self.start_id = id;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Dispatch and mount `description`, returning the complete markup.
    pub fn render_to_string(&self, description: &Value) -> RenderResult<String> {
        let _span = debug_span!("render", start_id = self.start_id).entered();
        let node = instantiate(description)?;
        Mounter::new(&self.options, self.start_id, &self.context).mount_to_string(&node, self.start_id)
    }

    /// Render into `container` with a single write. On error the container
    /// keeps its previous content.
    pub fn render(&self, description: &Value, container: &Container) -> RenderResult<()> {
        let markup = self.render_to_string(description)?;
        container.set_inner_html(markup);
        Ok(())
    }

    /// A long-lived instance of `component` sharing this renderer's options
    /// and context, for driving updates with [`Instance::set_state`].
    pub fn instance(&self, component: ComponentRef, props: Props) -> Instance {
        Instance::new(component, props, self.context.clone()).with_options(self.options.clone())
    }
}

/// Render `description` into `container` with default options, starting at
/// position id 0.
pub fn render(description: &Value, container: &Container) -> RenderResult<()> {
    Renderer::default().render(description, container)
}

pub fn render_to_string(description: &Value) -> RenderResult<String> {
    Renderer::default().render_to_string(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minivdom_core::{component_fn, create_element, parse_description, props, FnComponent};

    #[test]
    fn test_render_into_container() {
        let container = Container::new();
        let el = create_element("div", Some(props([("id", "x")])), vec!["hi".into()]);
        render(&el, &container).unwrap();
        assert!(container.inner_html().contains("<div id=\"x\" data-reactid=0>hi</div"));
    }

    #[test]
    fn test_component_renders_like_its_output() {
        let my_component = component_fn("MyComponent", |scope| {
            Ok(create_element("span", None, vec![scope.prop("name").clone()]))
        });
        let via = render_to_string(&create_element(
            &my_component,
            Some(props([("name", "Amy")])),
            vec![],
        ))
        .unwrap();
        let direct = render_to_string(&create_element("span", None, vec!["Amy".into()])).unwrap();
        assert_eq!(via, direct);
    }

    #[test]
    fn test_error_leaves_container_untouched() {
        let container = Container::new();
        container.set_inner_html("previous".into());
        let el = create_element("div", None, vec!["ok".into(), Value::Undefined]);
        assert!(matches!(
            render(&el, &container),
            Err(RenderError::Unsupported { .. })
        ));
        assert_eq!(container.inner_html(), "previous");
    }

    #[test]
    fn test_context_inherited_by_nested_components() {
        let label = component_fn("Label", |scope| {
            Ok(create_element("em", None, vec![scope.context.clone()]))
        });
        let page = {
            let label = label.clone();
            component_fn("Page", move |_| {
                Ok(create_element("main", None, vec![create_element(&label, None, vec![])]))
            })
        };
        let html = Renderer::default()
            .with_context(Value::from("ctx"))
            .render_to_string(&create_element(&page, None, vec![]))
            .unwrap();
        assert_eq!(html, "<main data-reactid=0><em data-reactid=1>ctx</em></main>");
    }

    #[test]
    fn test_render_parsed_json() {
        let json = r#"{ "type": "P", "props": { "class": "note", "children": ["n=", 7] } }"#;
        let desc = parse_description(json).unwrap();
        let html = Renderer::new(RenderOptions { ids: IdStrategy::Legacy, ..RenderOptions::default() })
            .with_start_id(4)
            .render_to_string(&desc)
            .unwrap();
        assert_eq!(html, "<p class=\"note\" data-reactid=4>n=7</p>");
    }

    #[test]
    fn test_renderer_instance_uses_options() {
        let c = FnComponent::new("Tick", |scope| {
            Ok(create_element("b", None, vec![scope.state("t").clone()]))
        })
        .with_initial_state(|_| props([("t", 0)]))
        .into_ref();
        let renderer = Renderer::new(RenderOptions { id_attribute: "data-at".into(), ..RenderOptions::default() });
        assert_eq!(renderer.options().id_attribute, "data-at");
        let container = Container::new();
        let mut inst = renderer.instance(c, Props::new());
        inst.mount_into(&container, 0).unwrap();
        inst.set_state(props([("t", 1)])).unwrap();
        assert_eq!(container.inner_html(), "<b data-at=0>1</b>");
    }
}
