//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, creation parameters and validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Request locale resolution
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** resolves the locale, validates the DTO into params, calls service
//! 3. **Service** calls the repository and converts entities to domain models
//! 4. **Controller** converts the result to a response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
