// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ETHEREUM_RPC_URL` | JSON-RPC endpoint for nonce and gas price queries | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the Ethereum JSON-RPC endpoint URL.
///
/// The endpoint is used only for two read-only queries per donation request:
/// `eth_getTransactionCount` and `eth_gasPrice`.
pub const ETHEREUM_RPC_URL_ENV: &str = "ETHEREUM_RPC_URL";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
