//! In-memory element tree for running the menu without a browser.
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use super::{ClassList, ClickTarget, ElementSource};

type ClickHandler = Box<dyn FnMut()>;

#[derive(Default)]
struct ElementInner {
    classes: RefCell<BTreeSet<String>>,
    handler: RefCell<Option<ClickHandler>>,
}

/// Shared handle: clones refer to the same element.
#[derive(Clone, Default)]
pub struct MemoryElement {
    inner: Rc<ElementInner>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element
    }

    /// Sorted snapshot of the current class list.
    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.borrow().iter().cloned().collect()
    }

    pub fn has_click_handler(&self) -> bool {
        self.inner.handler.borrow().is_some()
    }

    /// Dispatch a click. Returns false when no handler is registered.
    pub fn click(&self) -> bool {
        let handler = self.inner.handler.borrow_mut().take();
        match handler {
            Some(mut handler) => {
                handler();
                let mut slot = self.inner.handler.borrow_mut();
                // keep a handler registered during dispatch
                if slot.is_none() {
                    *slot = Some(handler);
                }
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("classes", &self.classes())
            .field("has_click_handler", &self.has_click_handler())
            .finish()
    }
}

impl ClassList for MemoryElement {
    fn add_class(&self, name: &str) {
        self.inner.classes.borrow_mut().insert(name.to_string());
    }

    fn remove_class(&self, name: &str) {
        self.inner.classes.borrow_mut().remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.inner.classes.borrow().contains(name)
    }
}

impl ClickTarget for MemoryElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) {
        *self.inner.handler.borrow_mut() = Some(handler);
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: &[&str]) -> Self {
        let mut document = Self::new();
        for id in ids {
            document.insert(id);
        }
        document
    }

    pub fn insert(&mut self, id: &str) -> MemoryElement {
        self.insert_element(id, MemoryElement::new())
    }

    pub fn insert_element(
        &mut self,
        id: &str,
        element: MemoryElement,
    ) -> MemoryElement {
        self.elements.insert(id.to_string(), element.clone());
        element
    }

    pub fn get(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl ElementSource for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}
