pub mod constants;
pub mod progress;
pub mod text;

pub use constants::*;
pub use progress::ProgressReporter;
pub use text::title_case;
