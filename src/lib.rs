#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod server;
pub mod tools;

mod tests;

pub use api::Components;
pub use config::Settings;
pub use error::*;
