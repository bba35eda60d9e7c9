use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Maximum number of transfers the ledger accepts in one multisend transaction
pub const CAPACITY: usize = 100;

/// Identifier of a transferable asset (coin) on the ledger
pub type AssetId = u64;

/// One record of the input file: `[address, amount, asset_id?]`
pub type Row = Vec<String>;

/// One transfer instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub address: String,
    /// Amount in minor units (major units × 10^18)
    #[serde(with = "decimal_string")]
    pub value: BigUint,
    pub asset_id: AssetId,
}

/// Ordered group of recipients signed under one sequence number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub items: Vec<Recipient>,
    pub sequence: u64,
}

/// What the caller needs to recover the signing account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KeyReference {
    /// BIP-39 phrase the key was derived from
    Mnemonic(String),
    /// The key was imported as a raw private key supplied by the caller
    PrivateKey,
}

/// Result of a successful job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOutput {
    pub address: String,
    pub recovery: KeyReference,
    /// Encoded signed transactions, in sequence order
    pub transactions: Vec<String>,
    /// UNIX timestamp (seconds) at which the job finished
    pub prepared_at: u64,
}

mod decimal_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
