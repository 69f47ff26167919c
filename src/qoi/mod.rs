pub use decoder::*;
pub mod grammar;

mod decoder;
