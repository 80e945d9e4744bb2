mod adapter;
mod config;
mod discovery;
mod error;
mod generate;
mod runner;
mod supervisor;

pub use adapter::{Invocation, prepare_invocation};
pub use config::{Config, ConfigOverrides};
pub use discovery::{CategoryChecks, CheckPlan, discover};
pub use error::{Error, Result};
pub use generate::{GeneratedCheck, GenerationRequest, generate};
pub use runner::{RunEvent, RunOptions, run_checks};
pub use supervisor::{ExecutionOutcome, Supervisor};
