// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::UnsignedTransaction,
    models::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
        LinkedAction,
    },
    state::AppState,
};

pub mod donate;
pub mod health;

pub fn router(state: AppState) -> Router {
    let donate_routes = Router::new()
        .route(
            "/",
            get(donate::get_donate_action).post(donate::post_donate_transaction),
        )
        .route(
            "/{amount}",
            get(donate::get_donate_action_for_amount).post(donate::post_donate_transaction),
        )
        .with_state(state);

    Router::new()
        .nest("/api/donate", donate_routes)
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        donate::get_donate_action,
        donate::get_donate_action_for_amount,
        donate::post_donate_transaction,
        health::health
    ),
    components(
        schemas(
            ActionGetResponse,
            ActionLinks,
            LinkedAction,
            ActionParameter,
            ActionPostRequest,
            ActionPostResponse,
            UnsignedTransaction
        )
    ),
    tags(
        (name = "Ethereum Donate", description = "Donation action discovery and transaction preparation"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy::primitives::Address;
    use async_trait::async_trait;

    use crate::blockchain::{ChainQuery, EthClientError};

    use super::*;

    struct NullChain;

    #[async_trait]
    impl ChainQuery for NullChain {
        async fn transaction_count(&self, _address: Address) -> Result<u64, EthClientError> {
            Ok(0)
        }

        async fn gas_price(&self) -> Result<u128, EthClientError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::new(Arc::new(NullChain)));
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[test]
    fn openapi_document_covers_donate_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/donate"));
        assert!(paths.contains_key("/api/donate/{amount}"));
        assert!(paths.contains_key("/health"));
    }
}
