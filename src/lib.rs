//! Sugarplum TUI - a terminal storefront for the Sugarplum Bakery
//!
//! This library provides the core functionality for loading the cake catalog,
//! describing the site's pages, running the order/contact/enquiry form flows,
//! and rendering the whole thing as an interactive terminal kiosk.

pub mod catalog;
pub mod forms;
pub mod pages;
pub mod ui;
