//! # UI Module
//!
//! Terminal user interface for the bakery kiosk.
//!
//! ## Components
//!
//! - [`App`] - application state and bootstrap wiring for one page
//! - [`gallery`] - catalog cards with hidden flags and a cursor
//! - [`overlay`] - the shared image-preview overlay
//! - [`popover`] - the transient promotional popover
//! - [`panels`] - exclusive panel groups (accordion, tabs)
//! - [`form_panel`] - a form flow with its timed confirmation
//! - [`mod@layout`] - pure rect computation shared by render and mouse dispatch
//! - [`mod@render`] - drawing functions for the TUI
//! - [`theme`] / [`config`] - colors and their persistence
//!
//! ## Layout (home page)
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├───────────────────────────────┬─────────────────┤
//! │  Search                       │                 │
//! ├───────┬───────┬───────────────┤  Testimonials   │
//! │ card  │ card  │ card          │                 │
//! ├───────┼───────┼───────────────┤                 │
//! │ card  │ card  │ card          │                 │
//! ├───────┴───────┴───────────────┴─────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The overlay, the offer popover and validation notices float above the
//! page and are drawn last.

pub mod app;
pub mod config;
pub mod form_panel;
pub mod gallery;
pub mod layout;
pub mod overlay;
pub mod panels;
pub mod popover;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
