pub mod assignments;
pub mod auth;
pub mod execution;
pub mod submissions;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use execution::ExecutionService;
pub use submissions::SubmissionService;
