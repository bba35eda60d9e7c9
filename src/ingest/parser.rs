//! Recipient Parser Module
//!
//! Converts raw rows into [`Recipient`] records. Three ingestion modes are supported:
//! - **PerRowAsset**: `[address, amount, asset_id]`
//! - **FixedAsset**: `[address, amount]`, one asset id for every row
//! - **FixedValue**: `[address]`, one amount and one asset id for every row
//!
//! Output order matches row order. The first bad row aborts the whole parse.

use crate::{
    AssetId, Error, Recipient, Result, Row,
    amount::{normalize, scale_major},
};
use num_bigint::BigUint;
use serde::Deserialize;
use tracing::{debug, warn};

/// How asset ids and amounts are resolved for each row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestMode {
    /// Every row carries its own asset id in the third column
    PerRowAsset,
    /// Every row pays in `asset_id`
    FixedAsset { asset_id: AssetId },
    /// Every row receives `value` major units of `asset_id`
    FixedValue { asset_id: AssetId, value: u64 },
}

impl IngestMode {
    /// Number of fields each row must have in this mode
    pub fn arity(&self) -> usize {
        match self {
            IngestMode::PerRowAsset => 3,
            IngestMode::FixedAsset { .. } => 2,
            IngestMode::FixedValue { .. } => 1,
        }
    }
}

/// Row-to-recipient converter for one ingestion mode
pub struct RecipientParser {
    mode: IngestMode,
}

impl RecipientParser {
    pub fn new(mode: IngestMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &IngestMode {
        &self.mode
    }

    /// Parse every row into a recipient
    ///
    /// # Returns
    /// * `Ok(recipients)` with one recipient per row, in row order
    /// * `Err` with the error of the first row that failed
    pub fn parse(&self, rows: &[Row]) -> Result<Vec<Recipient>> {
        // Fixed-value mode scales its amount once for all rows
        let fixed_value = match self.mode {
            IngestMode::FixedValue { value, .. } => Some(scale_major(value)),
            _ => None,
        };

        let recipients = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                self.parse_row(index + 1, row, fixed_value.as_ref())
                    .inspect_err(|e| warn!("Rejected row {}: {}", index + 1, e))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} recipients ({:?})", recipients.len(), self.mode);
        Ok(recipients)
    }

    /// Parse one row; `number` is the 1-based row position used in errors
    fn parse_row(&self, number: usize, row: &Row, fixed_value: Option<&BigUint>) -> Result<Recipient> {
        let expected = self.mode.arity();
        if row.len() != expected {
            return Err(Error::MalformedRecord {
                row: number,
                reason: format!("expected {} fields, found {}", expected, row.len()),
            });
        }

        let address = row[0].clone();
        let recipient = match &self.mode {
            IngestMode::PerRowAsset => Recipient {
                address,
                value: parse_amount(&row[1])?,
                asset_id: parse_asset_id(&row[2])?,
            },
            IngestMode::FixedAsset { asset_id } => Recipient {
                address,
                value: parse_amount(&row[1])?,
                asset_id: *asset_id,
            },
            IngestMode::FixedValue { asset_id, value } => Recipient {
                address,
                value: fixed_value.cloned().unwrap_or_else(|| scale_major(*value)),
                asset_id: *asset_id,
            },
        };
        Ok(recipient)
    }
}

/// Normalize an amount and reject negatives
fn parse_amount(text: &str) -> Result<BigUint> {
    normalize(text)?
        .to_biguint()
        .ok_or_else(|| Error::InvalidAmount {
            value: text.to_string(),
        })
}

fn parse_asset_id(text: &str) -> Result<AssetId> {
    text.parse::<AssetId>().map_err(|_| Error::InvalidAssetId {
        value: text.to_string(),
    })
}
