// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod influx_catalog;
pub mod pdf_canvas;
