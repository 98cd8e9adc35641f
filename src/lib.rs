pub mod bank;
pub mod handler;
pub mod inbound;
pub mod reply;
