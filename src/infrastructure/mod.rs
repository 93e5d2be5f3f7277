// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_mapper;
pub mod file_source;
pub mod http_response;
pub mod http_source;
