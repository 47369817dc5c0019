//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and handle all inserts, queries and
//! deletes. Conversion to domain models happens in the service layer.

pub mod pet;
