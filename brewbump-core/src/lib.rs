// brewbump-core/src/lib.rs
pub mod formula;
pub mod fs;
pub mod outputs;
pub mod readme;
pub mod sync;

pub use outputs::{OutputSink, Outputs};
pub use sync::{run_sync, SyncOptions, SyncOutcome};
