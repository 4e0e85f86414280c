mod action;
pub mod areas;
mod error;
mod expression;

pub use action::*;
pub use error::*;
pub use expression::*;
