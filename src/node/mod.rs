//! Ledger Node Module
//!
//! This module handles the two node queries a job needs:
//! - The account's current sequence number (nonce), fetched once per job
//! - The network's minimum fee rate, fetched once per encoded batch
//!
//! Neither call is retried; failures surface to the caller unchanged.

mod client;
pub use client::{JsonRpcNode, LedgerNode, NodeError};
