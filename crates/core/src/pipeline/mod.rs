//! The conversion pipeline: a per-file worker and the batch runner that
//! dispatches one worker per discovered file under a concurrency bound.

mod error;
mod runner;
mod types;
mod worker;

pub use error::JobError;
pub use runner::BatchRunner;
pub use types::{BatchReport, FailedJob, JobSuccess};
pub use worker::process_job;
