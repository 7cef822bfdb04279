//! Core state for the Vitrine portfolio manager.
//!
//! Everything the frontends share lives here: the JSON key-value [`Store`], the
//! [`Repository`] owning the project collection and the theme flag, and the
//! scroll/visibility state machines in [`tracking`]. The GUI and CLI are thin
//! shells over these types.

pub mod fs;
pub mod repository;
pub mod store;
pub mod tracking;

pub use repository::Repository;
pub use store::Store;

pub type Result<T> = std::result::Result<T, repository::Error>;
