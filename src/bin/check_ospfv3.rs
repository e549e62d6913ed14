//! check-ospfv3: verify OSPFv3 neighbours on an interface via SNMP.
//!
//! Part of the routewatch monitoring probes.

use clap::Parser;
use std::process::ExitCode;

use routewatch::Report;
use routewatch::cli::{self, CommonArgs};
use routewatch::probe::ospfv3;

/// Check every OSPFv3 neighbour on a given interface.
#[derive(Debug, Parser)]
#[command(name = "check-ospfv3", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Interface (ifDescr name) whose neighbours are checked.
    #[arg(short = 'i', long = "interface", value_name = "interface")]
    interface: String,
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
    ospfv3::check(&session, &args.interface).await
}
