//! Memoize-once-per-distinct-query layer.
//!
//! Report builds are deterministic over their query, so the first build for
//! a fingerprint is kept and handed back to every identical query that
//! follows. Not part of the aggregation core; builders work without it.

use std::sync::Arc;

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use super::balances_model::TrialBalanceQuery;
use crate::errors::Result;
use crate::reports::TrialBalance;

/// Hex-encoded sha256 over the serialized query.
pub fn query_fingerprint(query: &TrialBalanceQuery) -> Result<String> {
    let serialized = serde_json::to_vec(query)?;
    let digest = Sha256::digest(&serialized);
    Ok(hex::encode(digest))
}

#[derive(Default)]
pub struct BalanceCache {
    reports: DashMap<String, Arc<TrialBalance>>,
}

impl BalanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached report for `query`, building and storing it on a
    /// miss. Build failures are not cached.
    pub fn get_or_build<F>(&self, query: &TrialBalanceQuery, build: F) -> Result<Arc<TrialBalance>>
    where
        F: FnOnce() -> Result<TrialBalance>,
    {
        let fingerprint = query_fingerprint(query)?;
        if let Some(hit) = self.reports.get(&fingerprint) {
            log::debug!("Balance cache hit for query {}", fingerprint);
            return Ok(hit.clone());
        }
        let report = Arc::new(build()?);
        self.reports.insert(fingerprint, report.clone());
        Ok(report)
    }

    pub fn clear(&self) {
        self.reports.clear();
    }
}
