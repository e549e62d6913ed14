//! check-ospf: verify one OSPFv2 adjacency via SNMP.
//!
//! Part of the routewatch monitoring probes.

use clap::Parser;
use std::process::ExitCode;

use routewatch::Report;
use routewatch::cli::{self, CommonArgs};
use routewatch::probe::ospf;

/// Check the OSPFv2 adjacency with a given neighbour.
#[derive(Debug, Parser)]
#[command(name = "check-ospf", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// IPv4 address of the neighbour to check.
    #[arg(short = 'p', long = "peer", value_name = "peer")]
    peer: String,
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
    ospf::check(&session, &args.peer).await
}
