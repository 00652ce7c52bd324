//! Student record management: validation, queries, bulk import and
//! persistence of a class list in a binary data file.

pub mod app;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod import;
pub mod logging;
pub mod record;
pub mod store;
pub mod test_utils;
pub mod utils;

pub use error::{Result, StudentError};
pub use record::Student;
