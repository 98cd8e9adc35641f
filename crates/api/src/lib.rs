pub mod error;
pub mod flow;
pub mod lock;
pub mod score;

pub use flow::{Controller, Sink};
pub use lock::Serializer;
