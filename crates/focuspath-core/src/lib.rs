pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod traits;

pub use config::{AppConfig, ClassifierSettings};
pub use error::FocusError;
pub use input::TextBuffer;
pub use result::FocusResult;
pub use traits::Editable;
