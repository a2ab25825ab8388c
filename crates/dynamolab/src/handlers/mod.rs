pub mod error;
pub mod health;
pub mod music;
pub mod notes;

pub use error::AppError;
