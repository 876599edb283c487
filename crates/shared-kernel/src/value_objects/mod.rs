// crates/shared-kernel/src/value_objects/mod.rs
pub mod classification;
pub mod tally;

pub use classification::Classification;
pub use tally::LineTally;
