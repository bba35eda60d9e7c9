use crate::{Batch, Error, Recipient, Result};

/// Sequence number of the batch at `index` when the first batch uses `start`
pub fn sequence_at(start: u64, index: usize) -> Option<u64> {
    u64::try_from(index).ok().and_then(|i| start.checked_add(i))
}

/// Pair each chunk with its sequence number, in emission order
///
/// # Returns
/// * `Err(Error::SequenceOverflow)` if the last sequence number doesn't fit in a `u64`
pub fn assign_sequences(chunks: Vec<Vec<Recipient>>, start: u64) -> Result<Vec<Batch>> {
    let batches = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, items)| {
            let sequence =
                sequence_at(start, index).ok_or(Error::SequenceOverflow { start, batches })?;
            Ok(Batch { items, sequence })
        })
        .collect()
}
