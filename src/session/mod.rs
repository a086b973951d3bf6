pub mod builder;
pub mod controller;


pub use builder::build_queue;
pub use controller::{
    Direction,
    Phase,
    RetryPolicy,
    SessionController,
};
