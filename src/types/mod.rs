pub mod job_data;

pub use job_data::{JobDetail, JobSummary};
