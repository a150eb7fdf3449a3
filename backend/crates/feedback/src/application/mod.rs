pub mod config;
pub mod list;
pub mod moderate;
pub mod stats;
pub mod submit;
