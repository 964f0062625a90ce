mod error;
pub use error::*;
pub mod conflict_knapsack;
