// Presentation layer - HTTP routes over the dashboard service
pub mod app_state;
pub mod handlers;
