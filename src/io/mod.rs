pub mod clipboard;
pub mod input;
