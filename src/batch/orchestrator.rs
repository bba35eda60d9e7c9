//! Batch Orchestrator Module
//!
//! This module implements the orchestration layer that connects all batch-related
//! components together. One call prepares one job, start to finish.
//!
//! # Architecture Flow
//! 1. Read rows from the input file (file entry points only)
//! 2. Parse rows into recipients via `RecipientParser`
//! 3. Split recipients into chunks of at most 100 via `partition`
//! 4. Fetch the account's starting sequence number from the node (once)
//! 5. Pair chunks with contiguous sequence numbers via `assign_sequences`
//! 6. Encode each batch in order via `BatchEncoder`
//!
//! Any error stops the job and discards batches already encoded.

use crate::{
    Error, JobOutput, Recipient, Result, Row,
    account::Account,
    batch::{BatchEncoder, assign_sequences, partition},
    config::BatchConfig,
    ingest::{RecipientParser, read_rows},
    node::LedgerNode,
    tx::format_address,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Batch orchestrator
///
/// Owns the node client and signing account used for every job it runs.
pub struct BatchOrchestrator<N> {
    /// Node queried for the sequence number and fee rates
    node: N,
    /// Account whose key signs every batch
    account: Account,
    /// Network the transactions are valid on
    chain_id: u64,
    /// Batch encoding settings (gas asset)
    config: BatchConfig,
}

impl<N: LedgerNode> BatchOrchestrator<N> {
    /// Creates a new batch orchestrator
    ///
    /// # Arguments
    /// * `node` - Ledger node client
    /// * `account` - Signing account
    /// * `chain_id` - Network the transactions are valid on
    /// * `config` - Batch configuration settings
    pub fn new(node: N, account: Account, chain_id: u64, config: BatchConfig) -> Self {
        Self {
            node,
            account,
            chain_id,
            config,
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Read, parse and encode every recipient in the file at `path`
    ///
    /// # Arguments
    /// * `path` - Comma-separated input file
    /// * `has_headers` - Skip the first record when `true`
    /// * `parser` - Parser for the file's ingestion mode
    pub async fn prepare_from_file(
        &self,
        path: impl AsRef<Path>,
        has_headers: bool,
        parser: &RecipientParser,
    ) -> Result<JobOutput> {
        let rows = read_rows(path, has_headers)?;
        self.prepare_from_rows(&rows, parser).await
    }

    /// Parse and encode rows that are already in memory
    pub async fn prepare_from_rows(
        &self,
        rows: &[Row],
        parser: &RecipientParser,
    ) -> Result<JobOutput> {
        let recipients = parser.parse(rows)?;
        self.prepare(recipients).await
    }

    /// Encode `recipients` into signed multisend transactions
    ///
    /// # Returns
    /// * `Ok(JobOutput)` with one transaction per 100 recipients, in sequence order
    /// * `Err` with the first failure; no transactions are returned in that case
    pub async fn prepare(&self, recipients: Vec<Recipient>) -> Result<JobOutput> {
        let address = self.account.address();
        info!(
            "Preparing {} recipients for {}",
            recipients.len(),
            format_address(&address)
        );

        let chunks = partition(recipients);
        if chunks.is_empty() {
            debug!("No recipients, nothing to encode");
            return Ok(self.output(Vec::new()));
        }

        // Step 1: One sequence lookup for the whole job
        let start = self.node.current_sequence(address).await.map_err(|e| {
            warn!("Sequence lookup failed: {}", e);
            Error::SequenceUnavailable {
                address: format_address(&address),
                underlying: e,
            }
        })?;

        // Step 2: Contiguous sequence numbers from `start`
        let batches = assign_sequences(chunks, start)?;
        if let Some(last) = batches.last() {
            debug!(
                "Assigned sequences {}..={} to {} batches",
                start,
                last.sequence,
                batches.len()
            );
        }

        // Step 3: Encode in emission order, stopping at the first failure
        let encoder = BatchEncoder::new(
            &self.node,
            &self.account,
            self.chain_id,
            self.config.gas_asset_id,
        );
        let mut transactions = Vec::with_capacity(batches.len());
        for batch in &batches {
            transactions.push(encoder.encode(batch).await?);
            info!(
                "Batch #{} encoded with {} transfers",
                batch.sequence,
                batch.items.len()
            );
        }

        Ok(self.output(transactions))
    }

    fn output(&self, transactions: Vec<String>) -> JobOutput {
        JobOutput {
            address: format_address(&self.account.address()),
            recovery: self.account.recovery().clone(),
            transactions,
            prepared_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}
