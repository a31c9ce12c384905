//! REST API module.
//!
//! Success bodies are bare JSON (an article array or a message object); every
//! failure is rendered by `AppError` as `{"message": ...}`.

mod articles;
mod health;

pub use articles::*;
pub use health::*;

use crate::errors::AppError;

/// Response type for handlers.
pub type ApiResult<T> = Result<T, AppError>;
