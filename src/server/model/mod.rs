//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Creation parameters are only
//! produced by validating a request DTO.

pub mod pet;
pub mod validation;
