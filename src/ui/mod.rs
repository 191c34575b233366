// src/ui/mod.rs
pub mod analytics;
pub mod dashboard;
pub mod realtime;
pub mod upload;
pub mod widgets;
