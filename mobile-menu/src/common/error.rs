use std::fmt;

use wasm_bindgen::JsValue;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug)]
pub enum MenuError {
    NoWindow,
    NoDocument,
    InvalidConfig(String),
    SerdeError(serde_json::Error),
    JsError(JsValue),
}

impl From<JsValue> for MenuError {
    fn from(e: JsValue) -> Self {
        MenuError::JsError(e)
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(e: serde_json::Error) -> Self {
        MenuError::SerdeError(e)
    }
}

impl From<MenuError> for JsValue {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::JsError(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NoWindow => write!(f, "No window found"),
            MenuError::NoDocument => write!(f, "No document found"),
            MenuError::InvalidConfig(msg) => {
                write!(f, "Invalid menu configuration: {}", msg)
            }
            MenuError::SerdeError(e) => {
                write!(f, "Configuration parse error: {}", e)
            }
            MenuError::JsError(e) => write!(f, "JavaScript error: {:?}", e),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::SerdeError(e) => Some(e),
            _ => None,
        }
    }
}
