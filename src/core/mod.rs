pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::KarteiError;
pub use models::{
    Card,
    Record,
    Status,
};
