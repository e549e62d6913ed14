//! Shared command-line surface for the `check-*` probes.

use std::net::SocketAddr;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::error::{Error, Result};
use crate::snmp::Snmp2cSession;
use crate::status::Status;

/// Arguments common to every probe.
#[derive(Debug, Parser)]
pub struct CommonArgs {
    /// Host to check (hostname or IP, optionally with :port, default 161).
    #[arg(short = 'H', long = "host", value_name = "host")]
    pub host: String,

    /// SNMP community (v2c).
    #[arg(short = 'C', long = "community", value_name = "community")]
    pub community: String,

    /// Request timeout in seconds.
    #[arg(short = 't', long = "timeout", default_value = "10", value_parser = parse_timeout)]
    pub timeout: f64,

    /// Enable debug logging on stderr.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

/// Timeout flag parser: clap's attached-value form (`--timeout=-1`) would
/// otherwise let a negative value through to `Duration::from_secs_f64`,
/// which panics on it.
fn parse_timeout(s: &str) -> std::result::Result<f64, String> {
    let seconds: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{s}'"));
    }
    Ok(seconds)
}

impl CommonArgs {
    /// Resolve the target into a SocketAddr, defaulting to port 161.
    ///
    /// Accepts `host`, `host:port`, a bare IPv6 address, and a bracketed
    /// IPv6 address with or without a port.
    pub fn target_addr(&self) -> Result<SocketAddr> {
        let addr_str = if let Ok(v6) = self.host.parse::<std::net::Ipv6Addr>() {
            // A bare IPv6 address is all colons; it is never host:port.
            format!("[{v6}]:161")
        } else if self.host.starts_with('[') {
            if self.host.contains("]:") {
                self.host.clone()
            } else {
                format!("{}:161", self.host)
            }
        } else if self.host.contains(':') {
            self.host.clone()
        } else {
            format!("{}:161", self.host)
        };

        addr_str
            .parse()
            .or_else(|_| {
                use std::net::ToSocketAddrs;
                addr_str
                    .to_socket_addrs()
                    .map_err(|e| e.to_string())?
                    .next()
                    .ok_or_else(|| "hostname did not resolve".to_string())
            })
            .map_err(|reason| Error::Target {
                host: self.host.clone(),
                reason,
            })
    }

    /// Get the timeout as a Duration.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }

    /// Initialize tracing. The verdict line on stdout is unaffected; tracing
    /// writes to stderr and stays at `warn` unless `-d` is given.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.debug {
            "routewatch=debug"
        } else {
            "routewatch=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Open an SNMPv2c session against the target.
    pub async fn connect(&self) -> Result<Snmp2cSession> {
        let target = self.target_addr()?;
        Snmp2cSession::connect(target, &self.community, self.timeout_duration()).await
    }
}

/// Parse arguments, exiting UNKNOWN (3) with clap's usage text on stderr if
/// they are missing or invalid. A monitoring supervisor treats any other
/// exit code for argument errors as a health verdict, so clap's default
/// exit code 2 (CRITICAL) must not leak through.
pub fn parse_or_unknown<T: Parser>() -> T {
    use clap::error::ErrorKind;

    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let requested = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            if requested {
                process::exit(0);
            }
            process::exit(i32::from(Status::Unknown.exit_code()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: &str) -> CommonArgs {
        CommonArgs {
            host: host.to_string(),
            community: "public".to_string(),
            timeout: 10.0,
            debug: false,
        }
    }

    #[test]
    fn target_addr_default_port() {
        let addr = args("192.0.2.1").target_addr().unwrap();
        assert_eq!(addr.port(), 161);
    }

    #[test]
    fn target_addr_explicit_port() {
        let addr = args("192.0.2.1:1161").target_addr().unwrap();
        assert_eq!(addr.port(), 1161);
    }

    #[test]
    fn target_addr_bare_ipv6_default_port() {
        let addr = args("2001:db8::1").target_addr().unwrap();
        assert_eq!(addr.port(), 161);
        assert!(addr.is_ipv6());
    }

    #[test]
    fn target_addr_bracketed_ipv6_without_port() {
        let addr = args("[2001:db8::1]").target_addr().unwrap();
        assert_eq!(addr.port(), 161);
        assert!(addr.is_ipv6());
    }

    #[test]
    fn target_addr_bracketed_ipv6_with_port() {
        let addr = args("[2001:db8::1]:1161").target_addr().unwrap();
        assert_eq!(addr.port(), 1161);
    }

    #[test]
    fn target_addr_rejects_garbage() {
        assert!(args("no-such-host.invalid").target_addr().is_err());
    }

    #[test]
    fn timeout_duration_from_seconds() {
        assert_eq!(args("192.0.2.1").timeout_duration(), Duration::from_secs(10));
    }

    #[test]
    fn timeout_flag_rejects_non_positive_values() {
        for bad in ["--timeout=-1", "--timeout=0", "--timeout=nan", "--timeout=inf"] {
            let parsed = CommonArgs::try_parse_from([
                "check", "-H", "192.0.2.1", "-C", "public", bad,
            ]);
            assert!(parsed.is_err(), "{bad} should be rejected at parse time");
        }
    }

    #[test]
    fn timeout_flag_accepts_fractional_seconds() {
        let parsed = CommonArgs::try_parse_from([
            "check", "-H", "192.0.2.1", "-C", "public", "--timeout=2.5",
        ])
        .unwrap();
        assert_eq!(parsed.timeout_duration(), Duration::from_millis(2500));
    }
}
