use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{ClassList, ClickTarget, ElementSource};

impl ClassList for Element {
    fn add_class(&self, name: &str) {
        if let Err(e) = self.class_list().add_1(name) {
            log::warn!("Failed to add class {:?}: {:?}", name, e);
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(e) = self.class_list().remove_1(name) {
            log::warn!("Failed to remove class {:?}: {:?}", name, e);
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }
}

impl ClickTarget for Element {
    fn on_click(&self, handler: Box<dyn FnMut()>) {
        // ownership moves to the JS garbage collector
        let callback =
            Closure::<dyn FnMut()>::wrap(handler).into_js_value();
        let function = callback.unchecked_ref::<Function>();

        match self.dyn_ref::<HtmlElement>() {
            Some(html_element) => html_element.set_onclick(Some(function)),
            None => {
                // SVG and other non-HTML elements have no onclick slot
                if let Err(e) =
                    self.add_event_listener_with_callback("click", function)
                {
                    log::warn!("Failed to register click handler: {:?}", e);
                }
            }
        }
    }
}

impl ElementSource for Document {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}
