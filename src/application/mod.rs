// Application layer - Use cases over the loaded dataset
pub mod chart_composer;
pub mod dashboard_service;
pub mod dataset_source;
pub mod session;
