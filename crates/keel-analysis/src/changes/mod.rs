//! Session change detection against a version-controlled workspace.
//!
//! Two independent sources feed the result: version-control queries
//! (tracked modifications plus untracked files) and before/after directory
//! snapshots. The baseline captured at initialization is subtracted so
//! pre-existing dirty state never shows up as a session change; the
//! snapshot comparison adds back files that were dirty before the session
//! and edited again during it.

pub mod detector;
pub mod snapshot;
pub mod vcs;

pub use detector::ChangeDetector;
pub use snapshot::{snapshot, snapshot_changes, SnapshotEntry};
pub use vcs::{GitCli, NullVcs, VcsClient};
