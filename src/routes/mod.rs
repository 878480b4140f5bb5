pub mod assignments;

pub mod auth;

pub mod execution;

pub mod submissions;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use execution::configure_execution_routes;
pub use submissions::configure_submissions_routes;
