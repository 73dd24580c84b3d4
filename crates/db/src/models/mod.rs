//! Row types (`FromRow`) and request DTOs, one module per table.

pub mod admin_user;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod news;
