//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method runs exactly one
//! statement; the pooled connection is returned when the call completes,
//! whether it succeeded or failed.

pub mod admin_user_repo;
pub mod contact_repo;
pub mod event_repo;
pub mod gallery_repo;
pub mod news_repo;

pub use admin_user_repo::AdminUserRepo;
pub use contact_repo::ContactRepo;
pub use event_repo::EventRepo;
pub use gallery_repo::GalleryRepo;
pub use news_repo::NewsRepo;
