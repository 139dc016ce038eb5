//! External analyzer process handling.

pub mod invoke;
pub mod launch;

pub use invoke::{AnalyzerOutput, invoke};
pub use launch::{AnalyzerSpec, LaunchPlan, default_java};
