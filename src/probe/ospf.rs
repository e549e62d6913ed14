//! OSPFv2 neighbour probe (OSPF-MIB, RFC 4750).
//!
//! Walks `ospfNbrState` and classifies the adjacency state of one neighbour.
//! The row index of `ospfNbrTable` is `ospfNbrIpAddr.ospfNbrAddressLessIndex`,
//! so the neighbour's row is the one whose suffix starts with its IPv4
//! address.

use std::net::Ipv4Addr;

use crate::error::{Error, Result};
use crate::snmp::Session;
use crate::status::{Report, Status};

/// `OSPF-MIB::ospfNbrState` column base.
pub const NBR_STATE: &str = "1.3.6.1.2.1.14.10.1.6";

/// OSPF neighbour state machine (also used by OSPFv3, which defines the
/// same codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborState {
    Down,
    Attempt,
    Init,
    TwoWay,
    ExchangeStart,
    Exchange,
    Loading,
    Full,
}

impl NeighborState {
    /// Decode the numeric state code from the MIB.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => NeighborState::Down,
            2 => NeighborState::Attempt,
            3 => NeighborState::Init,
            4 => NeighborState::TwoWay,
            5 => NeighborState::ExchangeStart,
            6 => NeighborState::Exchange,
            7 => NeighborState::Loading,
            8 => NeighborState::Full,
            _ => return None,
        })
    }

    /// Lowercase state name, as used in verdict lines.
    pub fn name(self) -> &'static str {
        match self {
            NeighborState::Down => "down",
            NeighborState::Attempt => "attempt",
            NeighborState::Init => "init",
            NeighborState::TwoWay => "twoway",
            NeighborState::ExchangeStart => "exchangestart",
            NeighborState::Exchange => "exchange",
            NeighborState::Loading => "loading",
            NeighborState::Full => "full",
        }
    }

    /// Verdict for an adjacency in this state.
    ///
    /// `twoway` counts as healthy: on broadcast networks a router keeps
    /// non-DR/BDR neighbours at twoWay permanently. `loading` means the
    /// adjacency is still syncing its LSDB, which is degraded rather than
    /// down.
    pub fn verdict(self) -> Status {
        match self {
            NeighborState::Full | NeighborState::TwoWay => Status::Ok,
            NeighborState::Loading => Status::Warning,
            _ => Status::Critical,
        }
    }
}

/// Parse a raw `ospfNbrState`/`ospfv3NbrState` value string.
pub fn parse_state(column: &'static str, raw: &str) -> Result<NeighborState> {
    let code = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::malformed(column, raw))?;
    NeighborState::from_code(code).ok_or_else(|| Error::malformed(column, raw))
}

/// Check the OSPFv2 adjacency with `peer`.
pub async fn check<S: Session>(session: &S, peer: &str) -> Result<Report> {
    let peer: Ipv4Addr = peer
        .parse()
        .map_err(|_| Error::PeerAddress(peer.to_string()))?;

    let rows = session.walk(NBR_STATE).await?;
    let wanted = format!("{peer}.");
    let row = rows
        .iter()
        .find(|row| row.suffix.starts_with(&wanted))
        .ok_or_else(|| Error::NotFound(format!("OSPF neighbour {peer}")))?;

    let state = parse_state("ospfNbrState", &row.value)?;
    Ok(match state.verdict() {
        Status::Ok => Report::ok(format!("OSPF session with neighbour {peer} is {}", state.name())),
        Status::Warning => Report::warning(format!(
            "OSPF session with neighbour {peer} still {}",
            state.name()
        )),
        _ => Report::critical(format!(
            "OSPF session with neighbour {peer} down ({})",
            state.name()
        )),
    })
}
