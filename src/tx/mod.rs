//! Transaction Encoding Module
//!
//! Builds multisend transactions, signs them with the account key and
//! serializes them to the hex form the node accepts.
//!
//! # Wire Layout
//! ```text
//! rlp([nonce, chain_id, gas_price, gas_asset, type, data, payload, service_data,
//!      signature_type, signature_data])
//! data           = rlp([[[asset, to, value], ...]])
//! signature_data = rlp([v, r, s])
//! ```
//! The signature covers `keccak256` of the first nine fields.

mod multisend;


pub use multisend::{
    MULTISEND_TX_TYPE, MultisendTx, SendItem, SignedMultisend, format_address, parse_address,
};
