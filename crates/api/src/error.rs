use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The chat's lock could not be acquired in time. Nothing was mutated, so
    /// the event may be retried.
    Busy,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Busy => "Still working on your previous message. Please try again.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
