// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Donation action endpoints.
//!
//! GET returns the Actions discovery document (fixed amounts plus a custom
//! amount template); POST assembles the unsigned donation transaction for
//! the caller to sign and broadcast.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    blockchain::{parse_address, parse_amount, prepare_donate_transaction, NATIVE_DECIMALS},
    error::ApiError,
    models::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
        LinkedAction,
    },
    state::AppState,
};

/// Fixed destination wallet for all donations.
pub const DONATION_DESTINATION_WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

/// Selectable donation amounts, in whole ETH.
pub const DONATION_AMOUNT_ETH_OPTIONS: [&str; 3] = ["0.01", "0.05", "0.1"];

/// Amount used when the POST path omits one.
pub const DEFAULT_DONATION_AMOUNT_ETH: &str = "0.01";

const DONATION_ICON: &str =
    "https://ucarecdn.com/7aa46c85-08a4-4bc7-9376-88ec48bb146c85-08a4-4bc7-9376-88ec48bb1f43/-/preview/880x864/-/quality/smart/-/format/auto/";
const DONATION_TITLE: &str = "Donate to Alice";
const DONATION_DESCRIPTION: &str =
    "Ethereum Enthusiast | Support my research with an ETH donation.";

/// Get the donation action discovery document.
///
/// Lists one direct action per fixed amount and a parameterized action
/// accepting a free-form amount.
#[utoipa::path(
    get,
    path = "/api/donate",
    tag = "Ethereum Donate",
    responses(
        (status = 200, description = "Donation action discovery document", body = ActionGetResponse)
    )
)]
pub async fn get_donate_action() -> Json<ActionGetResponse> {
    let mut actions: Vec<LinkedAction> = DONATION_AMOUNT_ETH_OPTIONS
        .iter()
        .map(|amount| LinkedAction {
            href: format!("/api/donate/{amount}"),
            label: format!("{amount} ETH"),
            parameters: None,
        })
        .collect();

    actions.push(LinkedAction {
        href: "/api/donate/{amount}".to_string(),
        label: "Donate".to_string(),
        parameters: Some(vec![ActionParameter {
            name: "amount".to_string(),
            label: "Enter a custom ETH amount".to_string(),
        }]),
    });

    Json(ActionGetResponse {
        icon: DONATION_ICON.to_string(),
        label: format!("{DEFAULT_DONATION_AMOUNT_ETH} ETH"),
        title: DONATION_TITLE.to_string(),
        description: DONATION_DESCRIPTION.to_string(),
        links: Some(ActionLinks { actions }),
    })
}

/// Get the donation action document for a specific amount.
///
/// The amount is echoed into the label as-is; it is not checked against the
/// fixed options. The document is advisory, so arbitrary amounts are fine.
#[utoipa::path(
    get,
    path = "/api/donate/{amount}",
    tag = "Ethereum Donate",
    params(
        ("amount" = String, Path, description = "Donation amount in ETH", example = "0.1")
    ),
    responses(
        (status = 200, description = "Donation action document", body = ActionGetResponse)
    )
)]
pub async fn get_donate_action_for_amount(Path(amount): Path<String>) -> Json<ActionGetResponse> {
    Json(ActionGetResponse {
        icon: DONATION_ICON.to_string(),
        label: format!("{amount} ETH"),
        title: DONATION_TITLE.to_string(),
        description: DONATION_DESCRIPTION.to_string(),
        links: None,
    })
}

/// Prepare an unsigned donation transaction.
///
/// Converts the amount to wei, reads the sender's nonce and the current gas
/// price, and returns the serialized transaction skeleton. Nothing is
/// signed or broadcast.
#[utoipa::path(
    post,
    path = "/api/donate/{amount}",
    tag = "Ethereum Donate",
    params(
        ("amount" = Option<String>, Path, description = "Donation amount in ETH (defaults to 0.01)", example = "0.1")
    ),
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "Unsigned donation transaction", body = ActionPostResponse),
        (status = 400, description = "Malformed amount or account address"),
        (status = 503, description = "Chain RPC unavailable")
    )
)]
pub async fn post_donate_transaction(
    State(state): State<AppState>,
    amount: Option<Path<String>>,
    Json(request): Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, ApiError> {
    let amount = amount
        .map(|Path(amount)| amount)
        .unwrap_or_else(|| DEFAULT_DONATION_AMOUNT_ETH.to_string());

    // Validate before touching the network: a bad amount issues no RPC calls.
    let value = parse_amount(&amount, NATIVE_DECIMALS)
        .map_err(|e| ApiError::bad_request(format!("Invalid donation amount `{amount}`: {e}")))?;
    let sender =
        parse_address(&request.account).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let recipient =
        parse_address(DONATION_DESTINATION_WALLET).map_err(|e| ApiError::internal(e.to_string()))?;

    let transaction = prepare_donate_transaction(state.chain.as_ref(), sender, recipient, value)
        .await
        .map_err(|e| ApiError::service_unavailable(format!("Failed to query chain: {e}")))?;

    let serialized = serde_json::to_string(&transaction)
        .map_err(|e| ApiError::internal(format!("Failed to serialize transaction: {e}")))?;

    Ok(Json(ActionPostResponse {
        transaction: serialized,
    }))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use alloy::primitives::Address;
    use async_trait::async_trait;
    use axum::http::StatusCode;

    use crate::blockchain::{ChainQuery, EthClientError, UnsignedTransaction};

    use super::*;

    struct FakeChain {
        nonce: Result<u64, String>,
        gas_price: Result<u128, String>,
        nonce_calls: AtomicUsize,
        gas_price_calls: AtomicUsize,
    }

    impl FakeChain {
        fn new(nonce: Result<u64, String>, gas_price: Result<u128, String>) -> Arc<Self> {
            Arc::new(Self {
                nonce,
                gas_price,
                nonce_calls: AtomicUsize::new(0),
                gas_price_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChainQuery for FakeChain {
        async fn transaction_count(&self, _address: Address) -> Result<u64, EthClientError> {
            self.nonce_calls.fetch_add(1, Ordering::SeqCst);
            self.nonce.clone().map_err(EthClientError::RpcError)
        }

        async fn gas_price(&self) -> Result<u128, EthClientError> {
            self.gas_price_calls.fetch_add(1, Ordering::SeqCst);
            self.gas_price.clone().map_err(EthClientError::RpcError)
        }
    }

    const SENDER: &str = "0x1111111111111111111111111111111111111111";

    fn request(account: &str) -> Json<ActionPostRequest> {
        Json(ActionPostRequest {
            account: account.to_string(),
        })
    }

    #[tokio::test]
    async fn discovery_lists_one_action_per_fixed_amount() {
        let response = get_donate_action().await.0;

        assert_eq!(response.label, "0.01 ETH");
        assert_eq!(response.title, DONATION_TITLE);

        let actions = response.links.expect("discovery document has links").actions;
        assert_eq!(actions.len(), DONATION_AMOUNT_ETH_OPTIONS.len() + 1);

        for (action, amount) in actions.iter().zip(DONATION_AMOUNT_ETH_OPTIONS) {
            assert_eq!(action.label, format!("{amount} ETH"));
            assert_eq!(action.href, format!("/api/donate/{amount}"));
            assert!(action.parameters.is_none());
        }

        let custom = actions.last().unwrap();
        assert_eq!(custom.href, "/api/donate/{amount}");
        let parameters = custom.parameters.as_ref().unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "amount");
    }

    #[tokio::test]
    async fn amount_discovery_echoes_label_without_validation() {
        let response = get_donate_action_for_amount(Path("0.1".to_string())).await.0;
        assert_eq!(response.label, "0.1 ETH");
        assert!(response.links.is_none());

        // Arbitrary amounts are echoed too; the document is advisory.
        let response = get_donate_action_for_amount(Path("2.5".to_string())).await.0;
        assert_eq!(response.label, "2.5 ETH");
    }

    #[tokio::test]
    async fn post_without_amount_uses_default() {
        let chain = FakeChain::new(Ok(5), Ok(30_000_000_000));
        let state = AppState::new(chain.clone());

        let response = post_donate_transaction(State(state), None, request(SENDER))
            .await
            .unwrap()
            .0;

        let tx: UnsignedTransaction = serde_json::from_str(&response.transaction).unwrap();
        // 0.01 ETH in wei
        assert_eq!(tx.value, "10000000000000000");
        assert_eq!(tx.nonce, 5);
    }

    #[tokio::test]
    async fn post_with_amount_builds_exact_transfer() {
        let chain = FakeChain::new(Ok(0), Ok(12_000_000_000));
        let state = AppState::new(chain.clone());

        let response = post_donate_transaction(
            State(state),
            Some(Path("0.1".to_string())),
            request(SENDER),
        )
        .await
        .unwrap()
        .0;

        let tx: UnsignedTransaction = serde_json::from_str(&response.transaction).unwrap();
        assert_eq!(tx.value, "100000000000000000");
        assert_eq!(tx.gas_limit, 21_000);
        assert_eq!(tx.gas_price, "12000000000");
        assert_eq!(
            Address::from_str(&tx.to).unwrap(),
            Address::from_str(DONATION_DESTINATION_WALLET).unwrap()
        );
    }

    #[tokio::test]
    async fn post_rejects_malformed_amount_without_rpc_calls() {
        let chain = FakeChain::new(Ok(0), Ok(1));
        let state = AppState::new(chain.clone());

        let err = post_donate_transaction(
            State(state),
            Some(Path("abc".to_string())),
            request(SENDER),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(chain.nonce_calls.load(Ordering::SeqCst), 0);
        assert_eq!(chain.gas_price_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn post_rejects_malformed_account_without_rpc_calls() {
        let chain = FakeChain::new(Ok(0), Ok(1));
        let state = AppState::new(chain.clone());

        let err = post_donate_transaction(State(state), None, request("alice.eth"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(chain.nonce_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn post_surfaces_nonce_failure_as_upstream_error() {
        let chain = FakeChain::new(Err("connection refused".into()), Ok(1));
        let state = AppState::new(chain.clone());

        let err = post_donate_transaction(State(state), None, request(SENDER))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.message.contains("connection refused"));
        assert_eq!(chain.gas_price_calls.load(Ordering::SeqCst), 0);
    }
}
