//! check-bgp: verify iBGP session health via SNMP.
//!
//! Part of the routewatch monitoring probes.

use clap::Parser;
use std::process::ExitCode;

use routewatch::Report;
use routewatch::cli::{self, CommonArgs};
use routewatch::probe::bgp;

/// Check that every iBGP session on a router is established.
#[derive(Debug, Parser)]
#[command(name = "check-bgp", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Local AS number; peers in this AS are the iBGP sessions to check.
    #[arg(short = 'a', long = "local-as", value_name = "local AS")]
    local_as: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Args = cli::parse_or_unknown();
    args.common.init_tracing();

    let report = match run(&args).await {
        Ok(report) => report,
        Err(e) => Report::unknown(e.to_string()),
    };
    println!("{report}");
    report.exit_code()
}

async fn run(args: &Args) -> routewatch::Result<Report> {
    let session = args.common.connect().await?;
    bgp::check(&session, args.local_as).await
}
