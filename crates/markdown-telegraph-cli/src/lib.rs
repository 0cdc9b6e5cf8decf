pub mod github;
pub mod sync;
pub mod telegraph;

pub use sync::{SyncReport, sync};
pub use telegraph::{Publisher, TelegraphClient};
