//! Configuration management module

pub mod loader;

pub use loader::{Credentials, Environment, Settings};
