pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod state;
pub mod utils;
