//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here touches the network or the database. The other layers
//! build on these rules and on [`error::CoreError`].

pub mod contact;
pub mod error;
pub mod image;
pub mod status;
pub mod types;
