pub mod analyzer;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod explore;
pub mod gemini;
pub mod render;
