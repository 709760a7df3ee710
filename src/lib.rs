//! Tasks Page Frontend
//!
//! Behavior layer for the server-rendered task dashboard, compiled to
//! WebAssembly. The server owns every task; this crate only animates the page,
//! validates forms and turns clicks into navigations.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod models;
pub mod validation;

#[cfg(target_arch = "wasm32")]
mod app;


pub use config::PageConfig;
pub use controller::PageController;
pub use error::{PageError, PageResult};
pub use host::{BrowserPage, PageHost};
pub use models::{DeleteOutcome, InitReport, Route};
