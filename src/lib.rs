pub mod aggregate;
pub mod charts;
pub mod config;
pub mod load;
pub mod report;
pub mod stats;
