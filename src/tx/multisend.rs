use crate::{AssetId, Error, Recipient, Result};
use ethers::signers::LocalWallet;
use ethers::types::{Address, H256, Signature, U256};
use ethers::utils::rlp::{Rlp, RlpStream};
use ethers::utils::{hex, keccak256};
use num_bigint::BigUint;

/// Transaction type tag for a multisend
pub const MULTISEND_TX_TYPE: u8 = 0x0d;

/// Single-signature transactions
const SIGNATURE_TYPE_SINGLE: u8 = 1;

/// Number of fields covered by the signature
const UNSIGNED_FIELDS: usize = 9;

/// One transfer inside a multisend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendItem {
    pub asset_id: AssetId,
    pub to: Address,
    pub value: BigUint,
}

/// Unsigned multisend transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisendTx {
    pub chain_id: u64,
    pub sequence: u64,
    pub fee_rate: U256,
    pub gas_asset_id: AssetId,
    pub items: Vec<SendItem>,
}

/// Multisend transaction with its signature attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMultisend {
    tx: MultisendTx,
    signature: Signature,
}

impl MultisendTx {
    /// Build a multisend paying `recipients` in the given order
    ///
    /// The fee rate starts at zero; set it with [`MultisendTx::with_fee_rate`].
    ///
    /// # Returns
    /// * `Err(Error::InvalidAddress)` if a recipient address isn't a 20-byte hex address
    pub fn build(
        recipients: &[Recipient],
        sequence: u64,
        gas_asset_id: AssetId,
        chain_id: u64,
    ) -> Result<Self> {
        let items = recipients
            .iter()
            .map(|r| {
                Ok(SendItem {
                    asset_id: r.asset_id,
                    to: parse_address(&r.address)?,
                    value: r.value.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            chain_id,
            sequence,
            fee_rate: U256::zero(),
            gas_asset_id,
            items,
        })
    }

    pub fn with_fee_rate(mut self, fee_rate: U256) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Hash the signature commits to
    pub fn signing_hash(&self) -> H256 {
        let mut stream = RlpStream::new_list(UNSIGNED_FIELDS);
        self.append_unsigned(&mut stream);
        H256::from(keccak256(stream.out()))
    }

    /// Sign with the account key
    pub fn sign(self, wallet: &LocalWallet) -> Result<SignedMultisend> {
        let signature = wallet
            .sign_hash(self.signing_hash())
            .map_err(|e| Error::SigningFailed {
                sequence: self.sequence,
                underlying: e.to_string(),
            })?;
        Ok(SignedMultisend {
            tx: self,
            signature,
        })
    }

    fn append_unsigned(&self, stream: &mut RlpStream) {
        stream.append(&self.sequence);
        stream.append(&self.chain_id);
        stream.append(&self.fee_rate);
        stream.append(&self.gas_asset_id);
        stream.append(&MULTISEND_TX_TYPE);
        stream.append(&self.encode_data());
        stream.append(&Vec::<u8>::new()); // payload
        stream.append(&Vec::<u8>::new()); // service data
        stream.append(&SIGNATURE_TYPE_SINGLE);
    }

    fn encode_data(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(1);
        stream.begin_list(self.items.len());
        for item in &self.items {
            stream.begin_list(3);
            stream.append(&item.asset_id);
            stream.append(&item.to);
            stream.append(&value_bytes(&item.value));
        }
        stream.out().to_vec()
    }

    fn decode_data(data: &[u8]) -> Result<Vec<SendItem>> {
        let outer = Rlp::new(data);
        let list = outer.at(0).map_err(decode_error)?;
        let mut items = Vec::with_capacity(list.item_count().map_err(decode_error)?);
        for entry in list.iter() {
            let value: Vec<u8> = entry.val_at(2).map_err(decode_error)?;
            items.push(SendItem {
                asset_id: entry.val_at(0).map_err(decode_error)?,
                to: entry.val_at(1).map_err(decode_error)?,
                value: BigUint::from_bytes_be(&value),
            });
        }
        Ok(items)
    }
}

impl SignedMultisend {
    /// Serialize to lowercase hex without a prefix
    pub fn encode(&self) -> String {
        let mut signature = RlpStream::new_list(3);
        signature.append(&self.signature.v);
        signature.append(&self.signature.r);
        signature.append(&self.signature.s);

        let mut stream = RlpStream::new_list(UNSIGNED_FIELDS + 1);
        self.tx.append_unsigned(&mut stream);
        stream.append(&signature.out().to_vec());
        hex::encode(stream.out())
    }

    /// Parse the hex form produced by [`SignedMultisend::encode`]
    pub fn decode(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim_start_matches("0x")).map_err(decode_error)?;
        let rlp = Rlp::new(&bytes);
        if rlp.item_count().map_err(decode_error)? != UNSIGNED_FIELDS + 1 {
            return Err(Error::Decode {
                reason: "unexpected field count".to_string(),
            });
        }

        let tx_type: u8 = rlp.val_at(4).map_err(decode_error)?;
        if tx_type != MULTISEND_TX_TYPE {
            return Err(Error::Decode {
                reason: format!("unexpected transaction type {tx_type:#04x}"),
            });
        }

        let data: Vec<u8> = rlp.val_at(5).map_err(decode_error)?;
        let tx = MultisendTx {
            sequence: rlp.val_at(0).map_err(decode_error)?,
            chain_id: rlp.val_at(1).map_err(decode_error)?,
            fee_rate: rlp.val_at(2).map_err(decode_error)?,
            gas_asset_id: rlp.val_at(3).map_err(decode_error)?,
            items: MultisendTx::decode_data(&data)?,
        };

        let signature_data: Vec<u8> = rlp.val_at(UNSIGNED_FIELDS).map_err(decode_error)?;
        let signature_rlp = Rlp::new(&signature_data);
        let signature = Signature {
            v: signature_rlp.val_at(0).map_err(decode_error)?,
            r: signature_rlp.val_at(1).map_err(decode_error)?,
            s: signature_rlp.val_at(2).map_err(decode_error)?,
        };

        Ok(Self { tx, signature })
    }

    /// Address whose key produced the signature
    pub fn recover_signer(&self) -> Result<Address> {
        self.signature
            .recover(self.tx.signing_hash())
            .map_err(decode_error)
    }

    pub fn tx(&self) -> &MultisendTx {
        &self.tx
    }

    pub fn sequence(&self) -> u64 {
        self.tx.sequence
    }

    /// Transfers carried by the transaction, as recipients
    pub fn recipients(&self) -> Vec<Recipient> {
        self.tx
            .items
            .iter()
            .map(|item| Recipient {
                address: format_address(&item.to),
                value: item.value.clone(),
                asset_id: item.asset_id,
            })
            .collect()
    }
}

/// Parse an `Mx`- or `0x`-prefixed 20-byte hex address
pub fn parse_address(text: &str) -> Result<Address> {
    let invalid = || Error::InvalidAddress {
        address: text.to_string(),
    };
    let digits = text
        .strip_prefix("Mx")
        .or_else(|| text.strip_prefix("0x"))
        .ok_or_else(invalid)?;
    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    if bytes.len() != Address::len_bytes() {
        return Err(invalid());
    }
    Ok(Address::from_slice(&bytes))
}

/// Render an address in the ledger's `Mx` form
pub fn format_address(address: &Address) -> String {
    format!("Mx{}", hex::encode(address.as_bytes()))
}

/// Big-endian bytes without leading zeros, empty for zero
fn value_bytes(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

fn decode_error(e: impl std::fmt::Display) -> Error {
    Error::Decode {
        reason: e.to_string(),
    }
}
