//! Repository backend implementations.

#[cfg(feature = "local-repo")]
mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
