//! Asset loading pipeline for the stadium scene.
//!
//! The manifest is resolved first (falling back to the built-in task list),
//! then every glTF load task is issued at once. Tasks complete independently
//! and in any order; each one's handler runs exactly once when its scene has
//! finished spawning, and a failed task only leaves its object absent.

/// Per-asset completion handlers and the context they receive.
pub mod handlers;

/// glTF polling, scene spawning and sub-mesh collection.
pub mod load_tasks;

/// Scene manifest loading and load task issuing.
pub mod manifest_loader;

/// Loading progress tracking resource, reported to the host page.
pub mod progress;
