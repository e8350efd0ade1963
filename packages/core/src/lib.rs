//! Videonotes Core Logic Layer
//!
//! This crate provides the block-to-video association logic behind the
//! video note-taking commands of a hierarchical note editor: inserting a
//! formatted playback-time reference at the edit cursor, and toggling an
//! immersive "notes mode" layout on the associated video element.
//!
//! # Architecture
//!
//! - **Host as collaborator**: the editor's block model, render tree, and
//!   command palette are external; this crate only consumes their surface
//!   through the traits in [`host`] and [`render`]
//! - **Nearest-ancestor resolution**: a cursor position maps to a video by
//!   walking the block's ancestor chain upward and testing each ancestor's
//!   rendered subtree for a video tag
//! - **Degrade, never fail**: every miss (no block, no render, no video)
//!   is logged and surfaced as an explicit "none", never an error
//!
//! # Modules
//!
//! - [`models`] - Data structures (ContentBlock)
//! - [`render`] - Rendered-DOM surface (RenderedNode, VideoHandle, VideoStyle)
//! - [`host`] - Host editor contract (BlockAccessor, EditorHost, CommandRegistry)
//! - [`services`] - Business services (VideoResolver, NotesMode, playback reading)
//! - [`commands`] - Command surface wiring the services to the host palette

pub mod commands;
pub mod host;
pub mod models;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use commands::*;
pub use host::*;
pub use models::*;
pub use render::*;
pub use services::*;
