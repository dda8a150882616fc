//! Services built on the repository.

pub mod accounts;
pub mod maintenance;
pub mod study;

pub use accounts::AccountService;
pub use maintenance::{prune_unused_intervals, PruneReport};
pub use study::{RepetitionQueue, StudyService};
