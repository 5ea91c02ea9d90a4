// Domain layer - report data models and pure planning logic
pub mod graph;
pub mod layout;
pub mod report;
pub mod series;
pub mod ticks;
pub mod window;
