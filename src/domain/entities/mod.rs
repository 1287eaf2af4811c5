pub mod catalog;
pub mod config;
pub mod outcome;
pub mod selection;

pub use catalog::{Catalog, CatalogEntry};
pub use config::AppConfig;
pub use outcome::{ActionOutcome, ActionStatus, FailureReason, PackageAction, ReconcileReport};
pub use selection::{InvalidReason, InvalidToken, ParsedSelection, Selection};
