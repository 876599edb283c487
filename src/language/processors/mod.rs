// src/language/processors/mod.rs
pub mod c_style;
pub mod ruby_style;

pub use c_style::CStyleScanner;
pub use ruby_style::RubyScanner;
