pub mod error;
pub mod generator;
pub mod header;

pub use error::*;
pub use generator::*;
pub use header::*;
