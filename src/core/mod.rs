//! Core notifier types.

mod builder;
mod diff;
mod notifier;
mod template;

pub use builder::{NotifierBuilder, Options};
pub use diff::DiffStats;
pub use notifier::{ChangeEvent, ChangeVolumeNotifier};
