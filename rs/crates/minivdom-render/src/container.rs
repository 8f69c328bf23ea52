use std::cell::RefCell;
use std::rc::Rc;

/// Host content sink. Clones share the same content, so an instance can
/// hold on to the container it was mounted into and write re-renders back.
#[derive(Debug, Clone, Default)]
pub struct Container {
    content: Rc<RefCell<String>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content with `markup`.
    pub fn set_inner_html(&self, markup: String) {
        *self.content.borrow_mut() = markup;
    }

    pub fn inner_html(&self) -> String {
        self.content.borrow().clone()
    }

    /// Whether two handles refer to the same container.
    pub fn same(&self, other: &Container) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}
