//! Batch Encoder Module
//!
//! Turns one sequenced batch into a signed, serialized multisend transaction.
//! Each call makes exactly one fee-rate query against the node.

use crate::{
    AssetId, Batch, CAPACITY, Error, Result, account::Account, node::LedgerNode, tx::MultisendTx,
};
use tracing::{debug, warn};

/// Encoder for the batches of one job
pub struct BatchEncoder<'a, N> {
    node: &'a N,
    account: &'a Account,
    chain_id: u64,
    gas_asset_id: AssetId,
}

impl<'a, N: LedgerNode> BatchEncoder<'a, N> {
    /// Creates a batch encoder
    ///
    /// # Arguments
    /// * `node` - Node queried for the fee rate
    /// * `account` - Account whose key signs every batch
    /// * `chain_id` - Network the transactions are valid on
    /// * `gas_asset_id` - Asset fees are paid in
    pub fn new(node: &'a N, account: &'a Account, chain_id: u64, gas_asset_id: AssetId) -> Self {
        Self {
            node,
            account,
            chain_id,
            gas_asset_id,
        }
    }

    /// Build, sign and serialize one batch
    ///
    /// # Returns
    /// * `Ok(String)` with the hex-encoded signed transaction
    /// * `Err(Error::BatchTooLarge)` if the batch holds more than [`CAPACITY`] items
    /// * `Err(Error::InvalidAddress)` if a recipient address can't be encoded
    /// * `Err(Error::FeeQueryFailed)` if the fee rate lookup fails
    /// * `Err(Error::SigningFailed)` if signing fails
    pub async fn encode(&self, batch: &Batch) -> Result<String> {
        if batch.items.len() > CAPACITY {
            return Err(Error::BatchTooLarge {
                size: batch.items.len(),
                capacity: CAPACITY,
            });
        }

        let tx = MultisendTx::build(
            &batch.items,
            batch.sequence,
            self.gas_asset_id,
            self.chain_id,
        )?;

        let fee_rate = self.node.min_fee_rate().await.map_err(|e| {
            warn!("Fee rate lookup failed for sequence {}: {}", batch.sequence, e);
            Error::FeeQueryFailed { underlying: e }
        })?;

        let signed = tx.with_fee_rate(fee_rate).sign(self.account.wallet())?;
        debug!(
            "Signed batch with sequence {} ({} transfers, fee rate {})",
            batch.sequence,
            batch.items.len(),
            fee_rate
        );
        Ok(signed.encode())
    }
}
