use std::cell::RefCell;
use std::rc::Rc;

use crate::base::config::{ClassNames, MenuConfig};
use crate::base::state::MenuState;
use crate::elements::{ClassList, ClickTarget, ElementRefs, ElementSource};

/// Keeps the menu container and its two icons in sync with one
/// open/closed flag.
#[derive(Debug)]
pub struct MenuToggleController<E> {
    state: MenuState,
    refs: ElementRefs<E>,
    classes: ClassNames,
}

impl<E: ClassList> MenuToggleController<E> {
    /// Starts closed and renders once, so the markup always matches the
    /// initial state.
    pub fn new(refs: ElementRefs<E>, classes: ClassNames) -> Self {
        let controller = Self {
            state: MenuState::new(),
            refs,
            classes,
        };
        controller.render();
        controller
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn refs(&self) -> &ElementRefs<E> {
        &self.refs
    }

    pub fn open(&mut self) {
        self.state.set_open(true);
        self.render();
    }

    pub fn close(&mut self) {
        self.state.set_open(false);
        self.render();
    }

    pub fn toggle(&mut self) {
        let open = self.state.flip();
        log::debug!("Menu toggled, open={}", open);
        self.render();
    }

    fn render(&self) {
        let Some((menu, close_icon, menu_icon)) = self.refs.presentational()
        else {
            return;
        };
        let hidden = self.classes.hidden.as_str();
        let block = self.classes.block.as_str();

        if self.state.is_open() {
            menu.remove_class(hidden);
            close_icon.remove_class(hidden);
            close_icon.add_class(block);
            menu_icon.remove_class(block);
            menu_icon.add_class(hidden);
        } else {
            menu.add_class(hidden);
            close_icon.add_class(hidden);
            close_icon.remove_class(block);
            menu_icon.add_class(block);
            menu_icon.remove_class(hidden);
        }
    }
}

impl<E> MenuToggleController<E>
where
    E: ClassList + ClickTarget + 'static,
{
    /// Resolve the elements from `source`, render the closed state and
    /// wire the toggle button (when present) to `toggle`.
    ///
    /// The click handler only holds a weak reference: clicks stop having
    /// any effect once the returned controller is dropped.
    pub fn attach<S>(source: &S, config: &MenuConfig) -> Rc<RefCell<Self>>
    where
        S: ElementSource<Element = E>,
    {
        let refs = ElementRefs::resolve(source, &config.ids);
        let missing = refs.missing();
        if missing.is_empty() {
            log::debug!("Menu attached with all elements present");
        } else {
            log::warn!("Menu attached with missing elements: {:?}", missing);
        }

        let controller =
            Rc::new(RefCell::new(Self::new(refs, config.classes.clone())));

        {
            let borrowed = controller.borrow();
            match borrowed.refs.toggle_button.as_ref() {
                Some(button) => {
                    let handle = Rc::downgrade(&controller);
                    button.on_click(Box::new(move || {
                        if let Some(controller) = handle.upgrade() {
                            controller.borrow_mut().toggle();
                        }
                    }));
                }
                None => log::warn!(
                    "No toggle button {:?}, menu stays closed",
                    config.ids.toggle_button
                ),
            }
        }
        controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::memory::{MemoryDocument, MemoryElement};

    struct Page {
        document: MemoryDocument,
        menu: MemoryElement,
        close: MemoryElement,
        icon: MemoryElement,
        button: MemoryElement,
    }

    fn page() -> Page {
        let mut document = MemoryDocument::new();
        let menu = document.insert("mobile-menu");
        let close = document.insert("close-img");
        let icon = document.insert("menu-img");
        let button = document.insert("menu-btn");
        Page {
            document,
            menu,
            close,
            icon,
            button,
        }
    }

    fn snapshot(page: &Page) -> Vec<Vec<String>> {
        vec![page.menu.classes(), page.close.classes(), page.icon.classes()]
    }

    fn assert_closed(page: &Page) {
        assert!(page.menu.has_class("hidden"));
        assert!(page.icon.has_class("block"));
        assert!(!page.icon.has_class("hidden"));
        assert!(page.close.has_class("hidden"));
        assert!(!page.close.has_class("block"));
    }

    fn assert_open(page: &Page) {
        assert!(!page.menu.has_class("hidden"));
        assert!(page.close.has_class("block"));
        assert!(!page.close.has_class("hidden"));
        assert!(page.icon.has_class("hidden"));
        assert!(!page.icon.has_class("block"));
    }

    #[test]
    fn test_attach_renders_closed_state() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());
        assert!(!controller.borrow().is_open());
        assert_closed(&page);
        assert!(page.button.has_click_handler());
    }

    #[test]
    fn test_attach_corrects_inconsistent_markup() {
        let mut document = MemoryDocument::new();
        let menu = document.insert("mobile-menu");
        let close = document
            .insert_element("close-img", MemoryElement::with_classes(&["block"]));
        let icon = document
            .insert_element("menu-img", MemoryElement::with_classes(&["hidden"]));
        let page = Page {
            button: document.insert("menu-btn"),
            document,
            menu,
            close,
            icon,
        };

        MenuToggleController::attach(&page.document, &MenuConfig::default());
        assert_closed(&page);
    }

    #[test]
    fn test_click_opens_then_closes() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());
        let closed = snapshot(&page);

        assert!(page.button.click());
        assert!(controller.borrow().is_open());
        assert_open(&page);

        assert!(page.button.click());
        assert!(!controller.borrow().is_open());
        assert_eq!(snapshot(&page), closed);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());
        let closed = snapshot(&page);

        controller.borrow_mut().close();
        assert!(!controller.borrow().is_open());
        assert_eq!(snapshot(&page), closed);

        controller.borrow_mut().open();
        let opened = snapshot(&page);
        controller.borrow_mut().open();
        assert!(controller.borrow().is_open());
        assert_eq!(snapshot(&page), opened);
        assert_open(&page);
    }

    #[test]
    fn test_double_toggle_restores_either_state() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());

        for start_open in [false, true] {
            if start_open {
                controller.borrow_mut().open();
            } else {
                controller.borrow_mut().close();
            }
            let before = snapshot(&page);
            controller.borrow_mut().toggle();
            controller.borrow_mut().toggle();
            assert_eq!(controller.borrow().is_open(), start_open);
            assert_eq!(snapshot(&page), before);
        }
    }

    #[test]
    fn test_exactly_one_icon_is_block() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());

        for _ in 0..4 {
            let close_block = page.close.has_class("block");
            let icon_block = page.icon.has_class("block");
            assert!(close_block != icon_block);
            controller.borrow_mut().toggle();
        }
    }

    #[test]
    fn test_click_without_container_is_harmless() {
        let mut document = MemoryDocument::new();
        let close = document.insert("close-img");
        let icon = document.insert("menu-img");
        let button = document.insert("menu-btn");

        let controller =
            MenuToggleController::attach(&document, &MenuConfig::default());
        assert!(button.click());
        assert!(controller.borrow().is_open());
        // render skipped entirely, no partial mutation
        assert!(close.classes().is_empty());
        assert!(icon.classes().is_empty());
    }

    #[test]
    fn test_missing_button_leaves_menu_closed() {
        let document =
            MemoryDocument::with_ids(&["mobile-menu", "close-img", "menu-img"]);
        let controller =
            MenuToggleController::attach(&document, &MenuConfig::default());
        assert!(controller.borrow().refs().toggle_button.is_none());
        assert!(!controller.borrow().is_open());
        assert!(document.get("mobile-menu").unwrap().has_class("hidden"));
    }

    #[test]
    fn test_custom_ids_and_classes() {
        let mut document = MemoryDocument::new();
        let menu = document.insert("nav");
        let close = document.insert("nav-close");
        let icon = document.insert("nav-open");
        let button = document.insert("nav-toggle");
        let config = MenuConfig::from_json(
            r#"{
                "ids": {
                    "menuContainer": "nav",
                    "closeIcon": "nav-close",
                    "menuIcon": "nav-open",
                    "toggleButton": "nav-toggle"
                },
                "classes": {"hidden": "is-hidden", "block": "is-shown"}
            }"#,
        )
        .unwrap();

        let _controller = MenuToggleController::attach(&document, &config);
        assert!(menu.has_class("is-hidden"));
        assert!(icon.has_class("is-shown"));

        button.click();
        assert!(!menu.has_class("is-hidden"));
        assert!(close.has_class("is-shown"));
        assert!(icon.has_class("is-hidden"));
        assert!(!menu.has_class("hidden"));
    }

    #[test]
    fn test_dropped_controller_is_released() {
        let page = page();
        let controller =
            MenuToggleController::attach(&page.document, &MenuConfig::default());
        assert_eq!(Rc::strong_count(&controller), 1);

        let weak = Rc::downgrade(&controller);
        drop(controller);
        assert!(weak.upgrade().is_none());

        // handler stays registered but no longer touches the page
        assert!(page.button.click());
        assert_closed(&page);
    }

    #[test]
    fn test_independent_instances() {
        let first = page();
        let second = page();
        let config = MenuConfig::default();
        let a = MenuToggleController::attach(&first.document, &config);
        let b = MenuToggleController::attach(&second.document, &config);

        first.button.click();
        assert!(a.borrow().is_open());
        assert!(!b.borrow().is_open());
        assert_open(&first);
        assert_closed(&second);
    }
}
