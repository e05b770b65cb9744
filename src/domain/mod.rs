pub mod models;
pub mod filter;
pub mod wizard;
pub mod errors;

pub use models::*;
pub use wizard::*;
pub use errors::*;
