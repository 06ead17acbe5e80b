// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ethereum integration module.
//!
//! This module provides functionality for:
//! - Read-only chain queries (account nonce, gas price)
//! - Exact decimal-to-wei amount conversion
//! - Assembling unsigned value-transfer transactions

pub mod client;
pub mod transactions;

pub use client::{parse_address, ChainQuery, EthClient, EthClientError};
pub use transactions::{
    parse_amount, prepare_donate_transaction, AmountParseError, UnsignedTransaction,
    NATIVE_DECIMALS, TRANSFER_GAS_LIMIT,
};
