//! RepoDash keyboard shortcut engine.
//!
//! The binding and conflict-resolution core behind the RepoDash dashboard's
//! customizable shortcuts: action catalog, capture normalization, settings
//! merging across versions, conflict detection, and the capture session
//! state machine. The dashboard UI, settings persistence, and OS hotkey
//! registration live outside this crate.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
