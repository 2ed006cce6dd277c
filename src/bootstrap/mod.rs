pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;

pub use run::{run, run_client, run_server};
pub use runtime::{create_runtime, AppRuntime, UseCases};
