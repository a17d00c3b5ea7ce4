pub mod error;
pub mod feature_flags;

// Household todo domain
pub mod metadata;
pub mod rollover;
pub mod todo;

pub use error::*;
pub use feature_flags::*;
pub use metadata::*;
pub use todo::*;
