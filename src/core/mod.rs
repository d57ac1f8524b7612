//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │   Relay    │
//!             │  Adapter   │            │  (HTTP)    │
//!             │ (ratatui)  │            │            │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`form`]: Contact form fields, validation, payload
//! - [`notification`]: The self-dismissing outcome notification
//! - [`profile`]: Page content
//! - [`config`]: Settings resolution
//! - [`resume`]: "Download CV" file export

pub mod action;
pub mod config;
pub mod form;
pub mod notification;
pub mod profile;
pub mod resume;
pub mod state;
pub mod submission;
