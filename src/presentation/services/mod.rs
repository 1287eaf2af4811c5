pub mod async_executor;
pub mod logging;
pub mod software_flow;

pub use async_executor::AsyncExecutor;
pub use logging::init_logging;
pub use software_flow::{SoftwareFlow, render_catalog};
