mod error;

pub use error::{MenuError, MenuResult};
