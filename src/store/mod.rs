//! In-memory stores behind trait seams.
//!
//! Uploads, analysis results and credit balances all live in process
//! memory and vanish on restart. The traits keep the engine and API
//! layers indifferent to that choice.

pub mod analysis;
pub mod blob;
pub mod credit;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Insufficient credits for {user}: balance {balance}, required {required}")]
    InsufficientCredits {
        user: String,
        balance: i64,
        required: i64,
    },

    #[error("Internal lock failed")]
    LockFailed,
}

pub use analysis::{AnalysisStore, MemoryAnalysisStore};
pub use blob::{BlobStore, MemoryBlobStore};
pub use credit::{CreditLedger, MemoryCreditLedger};
