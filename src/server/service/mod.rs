//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They call repositories, convert entity models to domain models and surface storage
//! failures as `AppError`.

pub mod pet;
