//! CLI commands for anscore

pub mod batch;
pub mod dispatch;
pub mod input;
pub mod metrics;
pub mod quality;
pub mod report;
pub mod score;
