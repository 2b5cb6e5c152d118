// UI and console interaction module

pub mod progress;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use progress::{ProgressConfig, ProgressRunner, RunOutcome};
pub use prompts::{error, info, input_multiline, picker, success, y_to_continue};
