pub mod cases;
pub mod report;

pub use cases::{evaluate, load_cases, reference_cases, CaseInput, CaseResult, VerificationCase};
pub use report::{format_result, write_results};
