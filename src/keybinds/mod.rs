//! Keybind system for the interactive reader.
//!
//! This module provides configurable keyboard shortcuts for searching,
//! moving between posts and acting on the current post.

pub mod actions;
pub mod config;
pub mod help;
pub mod keys;

pub use actions::PageAction;
pub use config::{KeybindConfig, KeybindDef, KeybindMap};
pub use keys::{key_to_string, parse_key_string};
