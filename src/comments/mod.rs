//! Comment forms and validation
//!
//! Comments are session-local: posting is simulated with a fixed delay and
//! new comments live only as long as the [`CommentForm`] that holds them.

pub mod error;
pub mod form;
pub mod validation;

pub use error::CommentError;
pub use form::{CommentForm, FormSettings, SubmitOutcome, timestamp_now};
pub use validation::{Field, FieldError, FieldIssue, ValidComment, validate, validate_field};
