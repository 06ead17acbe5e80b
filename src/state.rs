// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::ChainQuery;

#[derive(Clone)]
pub struct AppState {
    /// Chain query client. Injected so tests can substitute a fake.
    pub chain: Arc<dyn ChainQuery>,
}

impl AppState {
    pub fn new(chain: Arc<dyn ChainQuery>) -> Self {
        Self { chain }
    }
}
