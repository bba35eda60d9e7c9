use crate::{Error, Result};
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, U256};
use std::future::Future;
use tracing::debug;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NodeError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Node returned an out-of-range value: {0}")]
    OutOfRange(String),
}

/// Queries a job makes against the ledger node
pub trait LedgerNode {
    /// Sequence number the next transaction from `address` must carry
    fn current_sequence(&self, address: Address) -> impl Future<Output = Result<u64, NodeError>> + Send;

    /// Current minimum fee rate accepted by the network
    fn min_fee_rate(&self) -> impl Future<Output = Result<U256, NodeError>> + Send;
}

/// Node client speaking JSON-RPC over HTTP
pub struct JsonRpcNode {
    provider: Provider<Http>,
}

impl JsonRpcNode {
    /// Creates a client for the node at `rpc_url`
    ///
    /// No request is made until the first query.
    pub fn connect(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| Error::NodeUnreachable {
            underlying: e.to_string(),
        })?;
        Ok(Self { provider })
    }
}

impl LedgerNode for JsonRpcNode {
    async fn current_sequence(&self, address: Address) -> Result<u64, NodeError> {
        let count = self
            .provider
            .get_transaction_count(address, None)
            .await
            .map_err(|e| NodeError::Transport(e.to_string()))?;

        if count > U256::from(u64::MAX) {
            return Err(NodeError::OutOfRange(count.to_string()));
        }
        debug!("Fetched sequence {} for {:?}", count, address);
        Ok(count.as_u64())
    }

    async fn min_fee_rate(&self) -> Result<U256, NodeError> {
        let rate = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| NodeError::Transport(e.to_string()))?;
        debug!("Fetched minimum fee rate {}", rate);
        Ok(rate)
    }
}
