//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let pet = factory::pet::create_pet(&db).await?;
//!
//!     // Using builder pattern for customization
//!     let cat = factory::pet::PetFactory::new(&db)
//!         .name("Mimi")
//!         .pet_type("GATO")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod pet;

// Re-export commonly used factory functions for concise usage
pub use pet::{create_pet, create_pets};
