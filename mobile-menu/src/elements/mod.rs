pub mod dom;
pub mod memory;

use crate::base::config::ElementIds;

/// Class membership of a single element, behind an opaque handle.
pub trait ClassList {
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    fn has_class(&self, name: &str) -> bool;
}

/// An element that accepts user clicks. Registering a handler replaces
/// any handler registered before it.
pub trait ClickTarget {
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// Lookup of elements by identifier. A missing element is `None`.
pub trait ElementSource {
    type Element: ClassList + ClickTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

#[derive(Clone, Debug)]
pub struct ElementRefs<E> {
    pub menu_container: Option<E>,
    pub close_icon: Option<E>,
    pub menu_icon: Option<E>,
    pub toggle_button: Option<E>,
}

impl<E> ElementRefs<E> {
    pub fn resolve<S>(source: &S, ids: &ElementIds) -> Self
    where
        S: ElementSource<Element = E>,
    {
        Self {
            menu_container: source.element_by_id(&ids.menu_container),
            close_icon: source.element_by_id(&ids.close_icon),
            menu_icon: source.element_by_id(&ids.menu_icon),
            toggle_button: source.element_by_id(&ids.toggle_button),
        }
    }

    /// Container and both icons, only when all three are present.
    pub fn presentational(&self) -> Option<(&E, &E, &E)> {
        match (&self.menu_container, &self.close_icon, &self.menu_icon) {
            (Some(menu), Some(close), Some(icon)) => Some((menu, close, icon)),
            _ => None,
        }
    }

    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.menu_container.is_none() {
            missing.push("menuContainer");
        }
        if self.close_icon.is_none() {
            missing.push("closeIcon");
        }
        if self.menu_icon.is_none() {
            missing.push("menuIcon");
        }
        if self.toggle_button.is_none() {
            missing.push("toggleButton");
        }
        missing
    }
}
