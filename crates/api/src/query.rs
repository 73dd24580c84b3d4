//! Shared query parameter types for API handlers.

use schoolsite_core::types::DbId;
use serde::Deserialize;

/// `?id=` selector used by the resource delete endpoints.
///
/// Optional so that a missing id reaches the handler and is reported as a
/// 400 with the usual error body.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<DbId>,
}
