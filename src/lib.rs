pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod tokenizer;
pub mod transcript;
pub mod ui;

pub use transcript::chunker;
