use std::{
  backtrace::{Backtrace, BacktraceStatus},
  fmt::Display,
};

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};

use crate::EmbeddingError;

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
  status_code: StatusCode,
}

impl AppError {
  /// Create with a status derived from the error type (500 unless recognised)
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    let err = err.into();
    let status_code = classify(&err);
    Self { err, status_code }
  }

  /// Create with custom status
  pub fn with_status<E: Into<anyhow::Error>>(status: StatusCode, err: E) -> Self {
    Self {
      err: err.into(),
      status_code: status,
    }
  }

  #[must_use]
  pub const fn status_code(&self) -> StatusCode {
    self.status_code
  }

  /// Get backtrace from anyhow (requires `RUST_BACKTRACE=1` to capture)
  pub fn backtrace(&self) -> &Backtrace {
    self.err.backtrace()
  }

  /// Borrow the underlying error as `T`, if that is what it wraps.
  pub fn downcast_ref<T>(&self) -> Option<&T>
  where
    T: Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.err.downcast_ref::<T>()
  }
}

fn classify(err: &anyhow::Error) -> StatusCode {
  match err.downcast_ref::<EmbeddingError>() {
    Some(EmbeddingError::Empty | EmbeddingError::NonFinite { .. }) => {
      StatusCode::UNPROCESSABLE_ENTITY
    }
    Some(EmbeddingError::DimensionMismatch { .. }) => StatusCode::CONFLICT,
    None => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = if cfg!(debug_assertions) {
      let bt = self.err.backtrace();
      if bt.status() == BacktraceStatus::Captured {
        format!("{}\nBacktrace:\n{}", self.err, bt)
      } else {
        format!(
          "{}\n(hint: set RUST_BACKTRACE=1 to enable backtrace)",
          self.err
        )
      }
    } else {
      self.err.to_string()
    };
    if self.status_code.is_server_error() {
      tracing::error!(status = %self.status_code, error = %self.err, "request failed");
    }
    (self.status_code, body).into_response()
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {}", self.status_code, self.err)
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}
