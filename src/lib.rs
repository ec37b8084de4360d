// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod archive;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod sheet;

pub use error::{Error, ExtractError};
pub use sheet::Row;
