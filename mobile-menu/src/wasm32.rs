//! Browser entry points.
use std::cell::RefCell;
use std::panic::{self, PanicInfo};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::base::config::MenuConfig;
use crate::common::{MenuError, MenuResult};
use crate::controller::MenuToggleController;

fn custom_panic_hook(info: &PanicInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    if cfg!(debug_assertions) {
        console_error_panic_hook::set_once();
    } else {
        panic::set_hook(Box::new(custom_panic_hook));
    }
}

fn window_and_document() -> MenuResult<(Window, Document)> {
    let window = web_sys::window().ok_or(MenuError::NoWindow)?;
    let document = window.document().ok_or(MenuError::NoDocument)?;
    Ok((window, document))
}

// the menu lives as long as the page, so nothing ever releases it
fn attach_for_page(document: &Document, config: &MenuConfig) {
    std::mem::forget(MenuToggleController::attach(document, config));
}

/// Attach the menu once the page has fully loaded, or right away when
/// loading already finished.
#[wasm_bindgen]
pub fn install(config: Option<String>) -> Result<(), JsValue> {
    let config = MenuConfig::from_optional_json(config.as_deref())?;
    let (window, document) = window_and_document()?;

    if document.ready_state() == "complete" {
        attach_for_page(&document, &config);
        return Ok(());
    }

    let onload = Closure::once_into_js(move || {
        log::debug!("onload");
        attach_for_page(&document, &config);
    });
    window.add_event_listener_with_callback("load", onload.unchecked_ref())?;
    Ok(())
}

#[wasm_bindgen(js_name = attachNow)]
pub fn attach_now(config: Option<String>) -> Result<MenuHandle, JsValue> {
    let config = MenuConfig::from_optional_json(config.as_deref())?;
    let (_, document) = window_and_document()?;
    Ok(MenuHandle {
        controller: MenuToggleController::attach(&document, &config),
    })
}

/// Programmatic access to an attached menu.
#[wasm_bindgen]
pub struct MenuHandle {
    controller: Rc<RefCell<MenuToggleController<Element>>>,
}

#[wasm_bindgen]
impl MenuHandle {
    pub fn open(&self) {
        self.controller.borrow_mut().open();
    }

    pub fn close(&self) {
        self.controller.borrow_mut().close();
    }

    pub fn toggle(&self) {
        self.controller.borrow_mut().toggle();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }
}
