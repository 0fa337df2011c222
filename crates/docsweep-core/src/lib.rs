pub mod config;
pub mod error;
pub mod logging;

pub mod audit;
pub mod html_clean;
pub mod http;
pub mod links;
pub mod markdown_clean;

mod lines;

pub use error::{Error, Result};
