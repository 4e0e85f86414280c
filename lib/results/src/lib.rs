mod csv;
mod error;
mod format;
mod json;
mod model;

pub use error::*;
pub use format::*;
pub use model::*;
