pub mod auth;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod news;
pub mod upload;

use schoolsite_core::types::DbId;

use crate::error::AppError;

/// Unwrap the `id` selector of an update body or delete query.
pub(crate) fn require_id(id: Option<DbId>) -> Result<DbId, AppError> {
    id.ok_or_else(|| AppError::BadRequest("id is required".into()))
}
