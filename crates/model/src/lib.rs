#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod event;
pub mod quiz;
pub mod render;
pub mod session;

pub use event::Event;
pub use quiz::{Bank, Choice, Question};
pub use render::{Entry, Render, Summary, Verdict};
pub use session::{Answers, ChatId, Session, State};
