pub(crate) mod common;
pub mod base;
pub mod controller;
pub mod elements;
mod wasm32;

pub use base::config::{ClassNames, ElementIds, MenuConfig};
pub use base::state::MenuState;
pub use common::{MenuError, MenuResult};
pub use controller::MenuToggleController;
pub use elements::memory::{MemoryDocument, MemoryElement};
pub use elements::{ClassList, ClickTarget, ElementRefs, ElementSource};
pub use wasm32::{attach_now, install, MenuHandle};
