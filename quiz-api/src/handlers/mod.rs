// Shared state and service handlers
pub mod main_handlers;
pub use main_handlers::AppState;

// Question page and answer submission
pub mod task_handlers;

// Results page and reset
pub mod results_handlers;
