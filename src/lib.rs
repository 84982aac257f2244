/// Basic application code
pub mod app;
/// REST clients for outside services
pub mod client;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Notification hooks for accepted submissions
pub mod notify;
/// Fixed-window request throttling
pub mod rate_limit;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
