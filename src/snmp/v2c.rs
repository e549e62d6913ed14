//! SNMPv2c session backed by `csnmp`.

use std::net::SocketAddr;
use std::time::Duration;

use csnmp::{ObjectIdentifier, ObjectValue, Snmp2cClient};

use crate::error::{Error, Result};
use crate::snmp::{Session, WalkRow};

/// A community-authenticated SNMPv2c session against a single agent.
pub struct Snmp2cSession {
    client: Snmp2cClient,
    target: SocketAddr,
}

impl Snmp2cSession {
    /// Open a session against `target` with the given community string.
    pub async fn connect(target: SocketAddr, community: &str, timeout: Duration) -> Result<Self> {
        let client = Snmp2cClient::new(
            target,
            community.as_bytes().to_vec(),
            None,
            Some(timeout),
            0,
        )
        .await
        .map_err(|e| Error::Snmp(e.to_string()))?;
        Ok(Self { client, target })
    }
}

impl Session for Snmp2cSession {
    async fn walk(&self, base: &str) -> Result<Vec<WalkRow>> {
        let top: ObjectIdentifier = base
            .parse()
            .map_err(|_| Error::Snmp(format!("invalid OID '{base}'")))?;

        tracing::debug!(host = %self.target, oid = base, "walking subtree");
        let results = self
            .client
            .walk(top)
            .await
            .map_err(|e| Error::Snmp(e.to_string()))?;

        let prefix = format!("{base}.");
        let mut rows = Vec::with_capacity(results.len());
        for (oid, value) in &results {
            let oid_text = oid.to_string();
            // Agents occasionally return the base object itself; skip
            // anything that is not strictly below the walked subtree.
            let Some(suffix) = oid_text.strip_prefix(&prefix) else {
                continue;
            };
            rows.push(WalkRow::new(suffix, render_value(value)));
        }
        tracing::debug!(rows = rows.len(), "walk complete");
        Ok(rows)
    }
}

/// Render an SNMP value into the loosely-typed string form the probes parse.
fn render_value(value: &ObjectValue) -> String {
    match value {
        ObjectValue::Integer(n) => n.to_string(),
        ObjectValue::String(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ObjectValue::ObjectId(oid) => oid.to_string(),
        ObjectValue::IpAddress(addr) => addr.to_string(),
        ObjectValue::Counter32(n) => n.to_string(),
        ObjectValue::Unsigned32(n) => n.to_string(),
        ObjectValue::TimeTicks(n) => n.to_string(),
        ObjectValue::Counter64(n) => n.to_string(),
        other => format!("{other:?}"),
    }
}
