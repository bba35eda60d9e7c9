//! Account Module
//!
//! Holds the key that signs every batch of a job, along with what the caller
//! needs to recover it afterwards.

mod wallet;

#[cfg(test)]
mod tests;

pub use wallet::Account;
