pub mod runner;

pub use runner::{build_engine, report_failure, run_plan, Plan};
