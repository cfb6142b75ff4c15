pub mod arch;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod specs;

pub use error::{Result, SgdErr};
