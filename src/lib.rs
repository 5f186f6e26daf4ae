// ============================================================================
// INVOICE ENTRY - Yew front-end with local draft persistence
// ============================================================================
// - models:     draft, expense lines, session record, option sets
// - validation: per-field rules for the invoice and the login form
// - services:   key/value storage and the typed stores on top of it
// - state:      plain state machines, testable without a browser
// - hooks:      wire state to yew components
// - components: screens and fields
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;

pub use components::{App, AppProps};
pub use config::AppConfig;
