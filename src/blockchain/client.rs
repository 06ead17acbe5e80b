// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ethereum JSON-RPC client for read-only chain queries.

use std::str::FromStr;

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
};
use async_trait::async_trait;

/// HTTP provider type for Ethereum (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Read-only chain queries needed to assemble an unsigned transaction.
///
/// Both queries are independent and side-effect free; failures propagate to
/// the caller without retries.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    /// Number of transactions ever sent from `address` (the next nonce).
    async fn transaction_count(&self, address: Address) -> Result<u64, EthClientError>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128, EthClientError>;
}

/// Ethereum JSON-RPC client backed by an alloy HTTP provider.
#[derive(Debug)]
pub struct EthClient {
    provider: HttpProvider,
}

impl EthClient {
    /// Create a new client for the given JSON-RPC endpoint.
    pub fn new(rpc_url: &str) -> Result<Self, EthClientError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| EthClientError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self { provider })
    }
}

#[async_trait]
impl ChainQuery for EthClient {
    async fn transaction_count(&self, address: Address) -> Result<u64, EthClientError> {
        self.provider
            .get_transaction_count(address)
            .await
            .map_err(|e| EthClientError::RpcError(e.to_string()))
    }

    async fn gas_price(&self) -> Result<u128, EthClientError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| EthClientError::RpcError(e.to_string()))
    }
}

/// Parse a 0x-prefixed hex string into an address.
pub fn parse_address(address: &str) -> Result<Address, EthClientError> {
    Address::from_str(address).map_err(|e| EthClientError::InvalidAddress(e.to_string()))
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum EthClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    RpcError(String),
}
