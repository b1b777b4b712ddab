pub mod analyzer;
pub mod categories;
pub mod config;
pub mod error;
pub mod export;
pub mod insights;
pub mod server;
// cmd and reports belong to the binary (main.rs).
