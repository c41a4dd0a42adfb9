//! Filesystem utilities for csb.
//!
//! Files csb writes on the user's behalf go through an atomic write so an
//! interrupted run never leaves a half-written config behind.

pub mod atomic;

pub use atomic::atomic_write_file;
