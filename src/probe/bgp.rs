//! iBGP session probe (CISCO-BGP4-MIB, cbgpPeer2Table).
//!
//! Walks five columns of `cbgpPeer2Table`, regroups them into per-peer
//! records, and reviews every peer whose remote AS equals the local AS given
//! on the command line. The table index is `InetAddressType.InetAddress`,
//! decoded into the peer's IP for verdict lines.

use crate::error::{Error, Result};
use crate::oid::decode_ip_index;
use crate::snmp::Session;
use crate::status::{Report, Review, Status};
use crate::table::{Column, walk_table};

/// Walked columns of `cbgpPeer2Entry` (1.3.6.1.4.1.9.9.187.1.2.5.1).
pub mod columns {
    use crate::table::Column;

    pub const STATE: Column = Column {
        name: "cbgpPeer2State",
        oid: "1.3.6.1.4.1.9.9.187.1.2.5.1.3",
    };
    pub const ADMIN_STATUS: Column = Column {
        name: "cbgpPeer2AdminStatus",
        oid: "1.3.6.1.4.1.9.9.187.1.2.5.1.4",
    };
    pub const REMOTE_AS: Column = Column {
        name: "cbgpPeer2RemoteAs",
        oid: "1.3.6.1.4.1.9.9.187.1.2.5.1.11",
    };
    pub const REMOTE_IDENTIFIER: Column = Column {
        name: "cbgpPeer2RemoteIdentifier",
        oid: "1.3.6.1.4.1.9.9.187.1.2.5.1.12",
    };
    pub const LAST_ERROR_TXT: Column = Column {
        name: "cbgpPeer2LastErrorTxt",
        oid: "1.3.6.1.4.1.9.9.187.1.2.5.1.28",
    };
}

const WALKED: [Column; 5] = [
    columns::STATE,
    columns::ADMIN_STATUS,
    columns::REMOTE_AS,
    columns::REMOTE_IDENTIFIER,
    columns::LAST_ERROR_TXT,
];

/// `cbgpPeer2State` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerState {
    Idle,
    Connect,
    Active,
    OpenSent,
    OpenConfirm,
    Established,
}

impl PeerState {
    /// Decode the numeric state code from the MIB.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => PeerState::Idle,
            2 => PeerState::Connect,
            3 => PeerState::Active,
            4 => PeerState::OpenSent,
            5 => PeerState::OpenConfirm,
            6 => PeerState::Established,
            _ => return None,
        })
    }

    /// Whether the session is up.
    pub fn is_established(self) -> bool {
        self == PeerState::Established
    }
}

/// `cbgpPeer2AdminStatus`: stop(1) means administratively down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStatus {
    Stop,
    Start,
}

impl AdminStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(AdminStatus::Stop),
            2 => Some(AdminStatus::Start),
            _ => None,
        }
    }
}

/// Check every iBGP session (remote AS == `local_as`) on the target.
pub async fn check<S: Session>(session: &S, local_as: u32) -> Result<Report> {
    let table = walk_table(session, &WALKED).await?;

    let mut review = Review::new();
    let mut peer_count = 0usize;

    for (index, record) in &table {
        let remote_as = record.int(columns::REMOTE_AS.name)?;
        if remote_as != i64::from(local_as) {
            continue;
        }
        peer_count += 1;

        let peer = peer_label(record.text(columns::REMOTE_IDENTIFIER.name), index)?;
        let admin = AdminStatus::from_code(record.int(columns::ADMIN_STATUS.name)?)
            .ok_or_else(|| admin_malformed(record.text(columns::ADMIN_STATUS.name)))?;
        if admin == AdminStatus::Stop {
            review.escalate(
                Status::Warning,
                format!("{peer}(AS{remote_as}) admin down"),
            );
            continue;
        }

        let state = PeerState::from_code(record.int(columns::STATE.name)?)
            .ok_or_else(|| state_malformed(record.text(columns::STATE.name)))?;
        if !state.is_established() {
            review.escalate(
                Status::Critical,
                format!(
                    "{peer}(AS{remote_as}) BGP session down{}",
                    last_error_suffix(record.text(columns::LAST_ERROR_TXT.name))
                ),
            );
        }
    }

    if peer_count == 0 {
        return Err(Error::NotFound(format!("iBGP peers with AS {local_as}")));
    }
    Ok(review.finish(format!("All ({peer_count}) iBGP sessions established")))
}

/// Name a peer by its router ID (`cbgpPeer2RemoteIdentifier`). A session
/// that never reached OpenConfirm has no learned identifier and reports
/// 0.0.0.0; fall back to the peer address decoded from the table index.
fn peer_label(identifier: Option<&str>, index: &str) -> Result<String> {
    match identifier.map(str::trim) {
        Some(id) if !id.is_empty() && id != "0.0.0.0" => Ok(id.to_string()),
        _ => decode_ip_index(index),
    }
}

fn admin_malformed(raw: Option<&str>) -> Error {
    Error::malformed(columns::ADMIN_STATUS.name, raw.unwrap_or_default())
}

fn state_malformed(raw: Option<&str>) -> Error {
    Error::malformed(columns::STATE.name, raw.unwrap_or_default())
}

/// Append the peer's last error text when the agent reports one.
fn last_error_suffix(last_error: Option<&str>) -> String {
    match last_error.map(str::trim) {
        Some(text) if !text.is_empty() => format!(" (last error: {text})"),
        _ => String::new(),
    }
}
