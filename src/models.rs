// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Actions Wire Format
//!
//! This module defines the request and response data structures of the
//! Actions discovery format served by the donation endpoints. All types
//! derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! The discovery document is advisory: it tells a third-party renderer what
//! the user can do (fixed amounts plus a free-form amount input) and where
//! to POST the chosen action.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discovery document returned by the GET endpoints.
///
/// `links` is present only on the root document; the per-amount variant
/// carries metadata alone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionGetResponse {
    /// Icon URL shown by the renderer.
    pub icon: String,
    /// Primary button label (e.g. "0.01 ETH").
    pub label: String,
    /// Action title.
    pub title: String,
    /// Action description.
    pub description: String,
    /// Selectable actions, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

/// Container for the selectable actions of a discovery document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// A single selectable action: either a direct link or a parameterized
/// template (href contains `{name}` placeholders for each parameter).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LinkedAction {
    /// POST target for this action.
    pub href: String,
    /// Button label.
    pub label: String,
    /// User-supplied inputs substituted into `href`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

/// A user-supplied input of a parameterized action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionParameter {
    /// Placeholder name in the action href.
    pub name: String,
    /// Input field label shown to the user.
    pub label: String,
}

/// Request body of the POST endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionPostRequest {
    /// Sender account address (0x-prefixed, 40 hex characters).
    pub account: String,
}

/// Response body of the POST endpoints.
///
/// `transaction` holds the JSON-serialized unsigned transaction as a string,
/// ready to be deserialized, signed, and broadcast by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionPostResponse {
    pub transaction: String,
}
