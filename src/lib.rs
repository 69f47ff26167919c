#![warn(clippy::nursery)]

pub mod qoi;
pub mod report;
pub mod util;
