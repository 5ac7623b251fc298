pub mod catalog;
pub mod clipboard;
pub mod composer;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod feedback;
pub mod form;
pub mod formatter;
pub mod io;
pub mod outbox;
pub mod template;
pub mod wizard;

pub use error::{FolioError, Result};
