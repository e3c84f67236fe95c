//! Status-carrying results.
//!
//! [`StatusResult<T>`] pairs a value with a [`Status`] and a diagnostic
//! message. [`StatusReport`] is the same contract for operations with no
//! value. Both implement [`HasStatus`].

pub mod kind;
pub mod outcome;
pub mod report;
pub mod traits;

pub use kind::Status;
pub use outcome::StatusResult;
pub use report::StatusReport;
pub use traits::{HasStatus, MessageArg};
