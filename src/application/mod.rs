// Application layer - report use cases and collaborator contracts
pub mod graph_renderer;
pub mod report_canvas;
pub mod report_service;
pub mod series_resolver;
pub mod statistics_catalog;
