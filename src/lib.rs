pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
mod error;
pub mod notify;
pub mod page;
pub mod render;
pub mod terminal;

pub use error::{Error, Result};
