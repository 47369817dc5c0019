//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameters, call services and map the results to
//! responses. Errors are returned as `AppError` and rendered by its `IntoResponse`.

pub mod pet;
