//! Session repository trait.
//!
//! Defines the interface for durable session persistence.

use crate::session::StoredSession;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract port over the durable key-value store holding the session.
///
/// This decouples the session store from the concrete storage mechanism
/// (a JSON file in production, an in-memory fake in tests). Only the
/// session store talks to this port; no other component touches durable
/// storage directly.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Reads the persisted session record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(StoredSession))`: a record is present
    /// - `Ok(None)`: nothing persisted
    /// - `Err(_)`: the store could not be read
    async fn load(&self) -> Result<Option<StoredSession>>;

    /// Writes the session record, replacing any previous one. Both fields
    /// are written in a single operation; readers never observe a partial
    /// write.
    async fn save(&self, session: &StoredSession) -> Result<()>;

    /// Removes the persisted record. Idempotent: clearing an already-empty
    /// store succeeds.
    async fn clear(&self) -> Result<()>;
}
