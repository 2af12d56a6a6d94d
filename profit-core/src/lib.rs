pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{compute_comparison, compute_percentage, compute_profit};
pub use error::ModelError;
pub use models::*;
