use minivdom_core::{Props, RenderError, RenderResult, Value, CHILDREN};
use tracing::{debug, trace};

use crate::instance::Instance;
use crate::node::{instantiate, Composite, Node, Tagged};
use crate::options::{IdStrategy, RenderOptions};

/// Void elements that must not have closing tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

const STYLE: &str = "style";

/// One mount pass over a node tree. Owns the id counter for the pass, so
/// every pass starting from the same id produces the same markup.
pub(crate) struct Mounter<'o> {
    options: &'o RenderOptions,
    /// `None` once the id space is exhausted.
    next_id: Option<u32>,
    context: &'o Value,
}

impl<'o> Mounter<'o> {
    pub(crate) fn new(options: &'o RenderOptions, start_id: u32, context: &'o Value) -> Self {
        Mounter {
            options,
            next_id: Some(start_id),
            context,
        }
    }

    /// Markup for the whole subtree, or the first error hit while walking it.
    pub(crate) fn mount_to_string(&mut self, node: &Node<'_>, id: u32) -> RenderResult<String> {
        let mut buf = String::with_capacity(256);
        self.mount(node, id, &mut buf)?;
        Ok(buf)
    }

    fn mount(&mut self, node: &Node<'_>, id: u32, buf: &mut String) -> RenderResult<()> {
        trace!(kind = node.kind(), id, "mount");
        match node {
            Node::Empty => Ok(()),
            Node::Text(text) => {
                self.write_text(text, buf);
                Ok(())
            }
            Node::Tagged(tagged) => self.mount_tagged(tagged, id, buf),
            Node::Composite(composite) => self.mount_composite(composite, id, buf),
        }
    }

    fn take_id(&mut self, handed: u32) -> RenderResult<u32> {
        match self.options.ids {
            IdStrategy::Legacy => Ok(handed),
            IdStrategy::Sequential => {
                let id = self.next_id.ok_or(RenderError::IdOverflow { last: u32::MAX })?;
                self.next_id = id.checked_add(1);
                Ok(id)
            }
        }
    }

    /// Id handed to the child at `offset` among its siblings. Only the legacy
    /// numbering counts up from the parent's id.
    fn child_id(&self, parent: u32, offset: usize) -> RenderResult<u32> {
        match self.options.ids {
            IdStrategy::Sequential => Ok(parent),
            IdStrategy::Legacy => u32::try_from(offset)
                .ok()
                .and_then(|o| parent.checked_add(o))
                .ok_or(RenderError::IdOverflow { last: parent }),
        }
    }

    fn mount_tagged(&mut self, tagged: &Tagged<'_>, id: u32, buf: &mut String) -> RenderResult<()> {
        let id = self.take_id(id)?;

        buf.push('<');
        buf.push_str(&tagged.tag);
        self.write_attrs(tagged.props, buf);
        buf.push(' ');
        buf.push_str(&self.options.id_attribute);
        buf.push('=');
        buf.push_str(&id.to_string());
        buf.push('>');

        if self.options.void_elements && VOID_ELEMENTS.contains(&tagged.tag.as_str()) {
            return Ok(());
        }

        if let Some(children) = tagged.props.get(CHILDREN) {
            self.mount_children(children, id, buf)?;
        }

        buf.push_str("</");
        buf.push_str(&tagged.tag);
        buf.push('>');
        Ok(())
    }

    /// Every prop except `children`, in insertion order.
    fn write_attrs(&self, props: &Props, buf: &mut String) {
        for (name, value) in props {
            if name == CHILDREN {
                continue;
            }
            let text = if name == STYLE {
                flatten_style(value)
            } else {
                value.to_string()
            };
            buf.push(' ');
            buf.push_str(name);
            buf.push_str("=\"");
            if self.options.escape {
                buf.push_str(&escape_attr(&text));
            } else {
                buf.push_str(&text);
            }
            buf.push('"');
        }
    }

    fn write_text(&self, text: &str, buf: &mut String) {
        if self.options.escape {
            buf.push_str(&escape_html(text));
        } else {
            buf.push_str(text);
        }
    }

    fn mount_children(&mut self, children: &Value, id: u32, buf: &mut String) -> RenderResult<()> {
        match children {
            Value::Null | Value::Undefined => Ok(()),
            Value::Array(items) => {
                let mut offset = 0;
                self.mount_items(items, id, &mut offset, buf)
            }
            single => {
                let node = instantiate(single)?;
                self.mount(&node, id, buf)
            }
        }
    }

    /// Siblings strictly left to right; nested arrays are flattened in place.
    fn mount_items(
        &mut self,
        items: &[Value],
        parent: u32,
        offset: &mut usize,
        buf: &mut String,
    ) -> RenderResult<()> {
        for item in items {
            if let Value::Array(nested) = item {
                self.mount_items(nested, parent, offset, buf)?;
                continue;
            }
            let node = instantiate(item)?;
            let id = self.child_id(parent, *offset)?;
            self.mount(&node, id, buf)?;
            *offset += 1;
        }
        Ok(())
    }

    /// A composite contributes no markup of its own: it is replaced by
    /// whatever its component renders, mounted at the same id.
    fn mount_composite(&mut self, composite: &Composite<'_>, id: u32, buf: &mut String) -> RenderResult<()> {
        debug!(component = composite.component.name(), id, "mounting composite");
        let instance = Instance::new(
            composite.component.clone(),
            composite.props.clone(),
            self.context.clone(),
        );
        let rendered = instance.render()?;
        let node = instantiate(&rendered)?;
        self.mount(&node, id, buf)
    }
}

/// `key:value;` per entry of a style object, in insertion order.
fn flatten_style(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}:{};", k, v))
            .collect(),
        Value::Null | Value::Undefined => String::new(),
        other => other.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
