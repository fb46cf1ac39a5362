//! Request handlers for API endpoints

pub mod search;

pub use search::*;
