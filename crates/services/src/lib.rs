#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use bank::QuestionBank;
pub use error::{BankError, SessionError};

pub use sessions::{NavOutcome, SessionLauncher, SessionProgress, SessionService};
