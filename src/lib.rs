pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{ConvertError, Result};
pub use service::{convert, extract, ConvertedFile, GstrWorkbook};
