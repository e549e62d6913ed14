//! Shared test fixtures: a canned SNMP session.

use std::collections::HashMap;

use routewatch::{Error, Result, Session, WalkRow};

/// In-memory [`Session`] returning pre-seeded walk results.
///
/// Subtrees are keyed by the exact base OID a probe walks. Walking an
/// unseeded base returns no rows, like a real agent with an empty subtree.
#[derive(Debug, Default)]
pub struct MockSession {
    subtrees: HashMap<String, Vec<WalkRow>>,
    failure: Option<String>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the rows returned for a walk of `base`.
    pub fn with_subtree(
        mut self,
        base: &str,
        rows: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        self.subtrees.insert(
            base.to_string(),
            rows.into_iter()
                .map(|(suffix, value)| WalkRow::new(suffix, value))
                .collect(),
        );
        self
    }

    /// Make every walk fail with an SNMP error.
    pub fn failing(message: &str) -> Self {
        Self {
            subtrees: HashMap::new(),
            failure: Some(message.to_string()),
        }
    }
}

impl Session for MockSession {
    async fn walk(&self, base: &str) -> Result<Vec<WalkRow>> {
        if let Some(message) = &self.failure {
            return Err(Error::Snmp(message.clone()));
        }
        Ok(self.subtrees.get(base).cloned().unwrap_or_default())
    }
}
