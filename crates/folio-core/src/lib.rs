//! # folio-core
//!
//! Core library for the folio portfolio.
//!
//! This crate provides the shared functionality used by both `folio-cli` and `folio-tui`:
//! the content document, the responsive column partitioner, expanded-item
//! bookkeeping, the view-state reducer and the contact-form mail relay.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_core::prelude::*;
//!
//! fn main() -> folio_core::Result<()> {
//!     let content = Content::builtin()?;
//!     let mode = LayoutMode::resolve(3000, &LayoutConstants::WEB);
//!     let placed = mode.place(content.projects.len()).apply(&content.projects);
//!     assert_eq!(placed.left.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`content`]: Portfolio document and its TOML loader
//! - [`layout`]: Side-column allocation and project placement
//! - [`toggle`]: Persistent expanded-item sets
//! - [`state`]: View-state snapshots and the event reducer
//! - [`contact`]: Contact form, validation and mail relay
//! - [`storage`]: Configuration file and environment overrides
//! - [`display`]: Table rendering for terminal output
//! - [`utils`]: Validation and text helpers
//! - [`error`]: Hierarchical error system with severity levels

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Content
    pub use crate::content::{Content, Project, Section};

    // Layout and state
    pub use crate::layout::{
        ColumnAllocation, LayoutConstants, LayoutMode, ProjectPlacement, compute_columns,
    };
    pub use crate::state::{UiEvent, ViewState, reduce};
    pub use crate::toggle::ToggleSet;

    // Contact
    pub use crate::contact::{ContactForm, EmailJsRelay, MailRelay, SubmitOutcome, submit};

    // Storage
    pub use crate::storage::config::Config;

    // Display utilities
    pub use crate::display::TableDisplay;
}

/// Portfolio content: hero, about, experiences, projects, skills, contact.
pub mod content;

/// Contact form delivery through an external relay.
pub mod contact;

/// Display layer - table rendering for the CLI.
pub mod display;

/// Error handling - hierarchical error system.
///
/// - Domain-specific error variants (Storage, Content, Relay, Validation, Config)
/// - Severity levels (High, Medium, Low)
pub mod error;

/// Responsive layout partitioning.
pub mod layout;

/// View state and its reducer.
pub mod state;

/// Storage layer - configuration persistence.
///
/// - [`storage::config`]: TOML configuration with environment overrides
pub mod storage;

/// Expanded-item sets.
pub mod toggle;

/// Utilities layer - shared helpers.
///
/// - [`utils::validation`]: Form field, email and URL validation
/// - [`utils::text`]: Text wrapping, truncation and centering
pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
