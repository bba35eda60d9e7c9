//! Error Module
//!
//! Every failure a job can hit maps to one variant here. Nothing is recovered
//! locally: the first error ends the job and no partial output is returned.

use crate::node::NodeError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid amount {value:?}")]
    InvalidAmount { value: String },

    #[error("Invalid asset id {value:?}")]
    InvalidAssetId { value: String },

    #[error("Failed to read input file {path}: {underlying}")]
    FileUnreadable { path: String, underlying: String },

    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Failed to fetch sequence number for {address}: {underlying}")]
    SequenceUnavailable {
        address: String,
        underlying: NodeError,
    },

    #[error("Sequence number overflow: start {start}, {batches} batches")]
    SequenceOverflow { start: u64, batches: usize },

    #[error("Failed to fetch minimum fee rate: {underlying}")]
    FeeQueryFailed { underlying: NodeError },

    #[error("Failed to sign batch with sequence {sequence}: {underlying}")]
    SigningFailed { sequence: u64, underlying: String },

    #[error("Batch has {size} items, capacity is {capacity}")]
    BatchTooLarge { size: usize, capacity: usize },

    #[error("Invalid recipient address {address:?}")]
    InvalidAddress { address: String },

    #[error("Key provider error: {underlying}")]
    KeyProvider { underlying: String },

    #[error("Failed to connect to node: {underlying}")]
    NodeUnreachable { underlying: String },

    #[error("Failed to decode transaction: {reason}")]
    Decode { reason: String },
}
