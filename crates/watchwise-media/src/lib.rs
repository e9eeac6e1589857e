//! Domain model and media repository for watchwise.
//!
//! Translates WatchMode catalog responses into a stable internal
//! representation, decoupling presentation code from the wire schema.

/// Domain entities.
pub mod model;

/// Media repository.
pub mod repository;
