//! Batch Creation Module
//!
//! This module handles batch creation and encoding:
//! - partition: Splits recipients into chunks the ledger accepts
//! - assign_sequences: Gives each chunk its sequence number
//! - BatchEncoder: Signs and serializes one batch
//! - BatchOrchestrator: Runs a whole job from rows to encoded transactions

mod encoder;
mod partitioner;
mod sequence;
pub mod orchestrator;


pub use encoder::BatchEncoder;
pub use orchestrator::BatchOrchestrator;
pub use partitioner::partition;
pub use sequence::{assign_sequences, sequence_at};
