use minivdom_core::{create_element, props, Component, ComponentRef, Props, RenderResult, Scope, Value};
use minivdom_render::{Container, RenderError, RenderOptions, Renderer};

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

struct Counter;

impl Component for Counter {
    fn name(&self) -> &str {
        "Counter"
    }

    fn initial_state(&self, props: &Props) -> Props {
        let start = props.get("start").cloned().unwrap_or(Value::from(0));
        minivdom_core::props([("count", start)])
    }

    fn render(&self, scope: &Scope<'_>) -> RenderResult<Value> {
        let count = scope.state("count").as_f64().unwrap_or(0.0);
        let color = if count < 0.0 { "crimson" } else { "seagreen" };
        Ok(create_element(
            "div",
            Some(props([("class", "counter")])),
            vec![
                create_element(
                    "h1",
                    Some(props([("style", Value::Object(props([("color", color)])))])),
                    vec!["Count: ".into(), count.into()],
                ),
                create_element("p", None, vec![scope.prop("label").clone()]),
            ],
        ))
    }
}

fn main() -> Result<(), RenderError> {
    let renderer = Renderer::new(RenderOptions {
        escape: true,
        ..RenderOptions::default()
    });
    let container = Container::new();

    let counter = ComponentRef::new(Counter);
    let mut app = renderer.instance(
        counter,
        props([("label", Value::from("clicks")), ("start", Value::from(2))]),
    );
    app.mount_into(&container, 0)?;
    println!("[counter] {}", container.inner_html());

    for delta in [1, 1, -5] {
        let count = app.state().get("count").and_then(Value::as_f64).unwrap_or(0.0);
        app.set_state(props([("count", count + f64::from(delta))]))?;
        println!("[counter] {}", container.inner_html());
    }
    Ok(())
}
