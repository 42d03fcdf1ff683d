pub mod config;
pub mod weave;
