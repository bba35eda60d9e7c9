//! Batch Partitioner Module
//!
//! Splits an ordered recipient list into chunks of at most [`CAPACITY`] recipients.
//! Chunks keep input order, and all but the last chunk are full.

use crate::{CAPACITY, Recipient};

/// Split `recipients` into chunks of at most [`CAPACITY`]
///
/// # Returns
/// `ceil(N / CAPACITY)` chunks; an empty input yields no chunks
pub fn partition(recipients: Vec<Recipient>) -> Vec<Vec<Recipient>> {
    partition_by(recipients, CAPACITY)
}

fn partition_by(recipients: Vec<Recipient>, capacity: usize) -> Vec<Vec<Recipient>> {
    let mut chunks = Vec::with_capacity(recipients.len().div_ceil(capacity));
    let mut remaining = recipients.into_iter().peekable();
    while remaining.peek().is_some() {
        chunks.push(remaining.by_ref().take(capacity).collect());
    }
    chunks
}
