//! Git integration layer.
//!
//! This module wraps the actual backend implementation (`cli_backend`)
//! and re-exports only the stable public API (`describe_dirty`).
//!
//! The idea is to hide the invocation details (currently the `git` CLI)
//! so that future backends or alternative implementations could be swapped
//! in without affecting the rest of the codebase.

mod cli_backend;

/// Describe the current checkout of a repository on disk.
///
/// This is the only public API exported from the `git` module.
/// Other modules should use this instead of depending directly on `cli_backend`.
pub use cli_backend::describe_dirty;
