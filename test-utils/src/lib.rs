//! Petmanager Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the pet
//! manager service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Pet;
//!
//! #[tokio::test]
//! async fn test_pet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Pet)
//!         .build()
//!         .await?;
//!
//!     let db = test.db()?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
