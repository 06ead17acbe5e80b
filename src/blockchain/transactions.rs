// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unsigned transaction assembly for native ETH transfers.
//!
//! This module converts human-readable donation amounts to wei and builds
//! the unsigned transaction skeleton returned to the caller. Nothing here
//! signs or broadcasts; the two chain reads (nonce, gas price) are the only
//! I/O involved.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::client::{ChainQuery, EthClientError};

/// Gas limit for a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Decimal places of the native currency (wei per ETH).
pub const NATIVE_DECIMALS: u8 = 18;

/// An unsigned value-transfer transaction.
///
/// `value` and `gas_price` are decimal strings of wei so amounts survive
/// JSON round-trips exactly. The caller signs and broadcasts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    /// Recipient address.
    pub to: String,
    /// Amount in wei.
    pub value: String,
    /// Sender account nonce.
    pub nonce: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas price in wei.
    pub gas_price: String,
}

/// Errors raised while converting an amount string to wei.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("Invalid amount format")]
    InvalidFormat,

    #[error("Too many decimal places (max {0})")]
    TooManyDecimals(u8),

    #[error("Amount overflow")]
    Overflow,
}

/// Parse a human-readable amount to its smallest-unit representation.
///
/// The conversion is exact: the fractional part may use at most `decimals`
/// digits and is padded, never rounded. Rejects anything that is not a
/// plain non-negative decimal number.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, AmountParseError> {
    let (whole_str, frac_str) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };

    if frac_str.contains('.') {
        return Err(AmountParseError::InvalidFormat);
    }

    if !whole_str.bytes().all(|b| b.is_ascii_digit()) || whole_str.is_empty() {
        return Err(AmountParseError::InvalidFormat);
    }
    let whole: u128 = whole_str
        .parse()
        .map_err(|_| AmountParseError::Overflow)?;

    let frac: u128 = if frac_str.is_empty() {
        0
    } else {
        if frac_str.len() > decimals as usize {
            return Err(AmountParseError::TooManyDecimals(decimals));
        }
        if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::InvalidFormat);
        }
        // Pad to `decimals` digits so "1.5" becomes 1.500...0
        let padded = format!("{frac_str:0<width$}", width = decimals as usize);
        padded.parse().map_err(|_| AmountParseError::InvalidFormat)?
    };

    let multiplier = 10u128.pow(decimals as u32);
    let total = whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(frac))
        .ok_or(AmountParseError::Overflow)?;

    Ok(U256::from(total))
}

/// Assemble an unsigned transfer of `value` wei from `sender` to `recipient`.
///
/// Queries the sender's nonce and the current gas price through `chain`;
/// either failure propagates unchanged and aborts the request. The gas
/// price query is not issued if the nonce query fails.
pub async fn prepare_donate_transaction(
    chain: &dyn ChainQuery,
    sender: Address,
    recipient: Address,
    value: U256,
) -> Result<UnsignedTransaction, EthClientError> {
    let nonce = chain.transaction_count(sender).await?;
    let gas_price = chain.gas_price().await?;

    Ok(UnsignedTransaction {
        to: recipient.to_string(),
        value: value.to_string(),
        nonce,
        gas_limit: TRANSFER_GAS_LIMIT,
        gas_price: gas_price.to_string(),
    })
}
