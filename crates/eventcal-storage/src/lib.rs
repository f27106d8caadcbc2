// Storage layer for eventcal
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: pooled PostgreSQL gateway with a single parameterized execute
// - InMemoryDatabase: same event operations without a store
// - StorageBackend: enum dispatch over the two

pub mod backend;
pub mod config;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use config::{DatabaseConfig, DatabaseTarget};
pub use error::{Result, StorageError};
pub use gateway::{Database, SqlValue};
pub use memory::InMemoryDatabase;
pub use models::*;
