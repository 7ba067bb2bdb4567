pub mod models;
pub mod validation;
pub mod store;
pub mod sync;
pub mod services;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use store::*;
pub use sync::*;
pub use services::*;
pub use errors::*;
