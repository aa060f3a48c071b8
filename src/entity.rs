use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// Trait that any domain entity must implement to be mapped from and onto its DTOs.
pub trait Entity {
    type Id: Debug;
    type CreatePayload;
    type Patch;

    /// Get the ID of the entity, `None` until the persistence layer assigns one
    fn id(&self) -> Option<&Self::Id>;

    /// Creation timestamp, fixed for the life of the entity
    fn created(&self) -> DateTime<Utc>;

    /// Construct the full Entity from the payload, stamped with `created`
    fn from_create(payload: &Self::CreatePayload, created: DateTime<Utc>) -> Self;

    // --- Lifecycle Hooks ---

    /// Apply a patch in place. Fields absent from the patch are left alone.
    fn on_update(&mut self, patch: &Self::Patch);
}
