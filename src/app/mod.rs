pub mod cli;
pub mod commands;
pub mod render;
mod context;

pub use context::AppContext;
