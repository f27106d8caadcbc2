// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode, tests) storage.

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::gateway::Database;
use crate::memory::InMemoryDatabase;
use crate::models::*;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend
    pub async fn postgres(config: &DatabaseConfig) -> Result<Self> {
        let db = Database::connect(config).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Short name used in logs and the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    /// Release pooled connections. No-op for in-memory.
    pub async fn close(&self) {
        if let Self::Postgres(db) = self {
            db.close().await;
        }
    }

    // ============================================
    // Events
    // ============================================

    pub async fn list_events_by_user(&self, user_id: i64) -> Result<Vec<EventRow>> {
        match self {
            Self::Postgres(db) => db.list_events_by_user(user_id).await,
            Self::InMemory(db) => db.list_events_by_user(user_id).await,
        }
    }

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        match self {
            Self::Postgres(db) => db.create_event(input).await,
            Self::InMemory(db) => db.create_event(input).await,
        }
    }

    pub async fn update_event(&self, id: i64, input: UpdateEventRow) -> Result<Option<EventRow>> {
        match self {
            Self::Postgres(db) => db.update_event(id, input).await,
            Self::InMemory(db) => db.update_event(id, input).await,
        }
    }

    pub async fn delete_event(&self, id: i64) -> Result<()> {
        match self {
            Self::Postgres(db) => db.delete_event(id).await,
            Self::InMemory(db) => db.delete_event(id).await,
        }
    }
}
