pub mod check_branch;
pub mod check_coverage;
pub mod config;
pub mod run_script;
