//! This crate prepares signed multi-transfer transactions from a recipient list.
//! It includes modules for data types, amount normalization, recipient ingestion,
//! batch partitioning and sequencing, ledger node access, accounts, transaction
//! encoding, and configuration.

pub mod types; // Defines common data structures and types used throughout the system.
pub mod error; // Error kinds surfaced by every stage of a job.
pub mod amount; // Converts human-readable amounts into exact minor units.
pub mod ingest; // Reads delimited input files and turns rows into recipients.
pub mod batch; // Partitions recipients, assigns sequences and encodes batches.
pub mod node; // Provides access to the ledger node (sequence numbers, fee rates).
pub mod account; // Holds the signing key and its recovery material.
pub mod tx; // Builds, signs and serializes multisend transactions.
pub mod config; // Defines and loads system configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use error::{Error, Result};
pub use config::Config;
pub use batch::BatchOrchestrator;
