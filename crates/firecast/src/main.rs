use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod entry;
mod export;
mod ledger;
mod logging;
mod paths;
mod schedule_csv;
mod settings;
mod util;

use ledger::Ledger;
use paths::DataPaths;
use util::format::format_currency;

#[derive(Parser, Debug)]
#[command(name = "firecast")]
#[command(about = "Project account balances and net worth through retirement")]
struct Args {
    /// Path to the data directory (default: ~/.firecast/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the projection and write the output CSV
    Project {
        /// Balance ledger CSV (default: {data_dir}/balances.csv)
        #[arg(long)]
        balances: Option<PathBuf>,
        /// Cashflow schedule CSV (default: {data_dir}/cashflow_schedule.csv)
        #[arg(long)]
        schedule: Option<PathBuf>,
        /// Assumptions JSON (default: {data_dir}/assumptions.json)
        #[arg(long)]
        assumptions: Option<PathBuf>,
        /// Output CSV (default: {data_dir}/projection.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactively append a row of actual balances to the ledger
    AddBalances {
        /// Balance ledger CSV (default: {data_dir}/balances.csv)
        #[arg(long)]
        balances: Option<PathBuf>,
    },
    /// Print the actual net-worth series from the ledger
    NetWorth {
        /// Balance ledger CSV (default: {data_dir}/balances.csv)
        #[arg(long)]
        balances: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let paths = match &args.command {
        Command::Project {
            balances,
            schedule,
            assumptions,
            out,
        } => DataPaths::resolve(
            args.data_dir.clone(),
            balances.clone(),
            schedule.clone(),
            assumptions.clone(),
            out.clone(),
        ),
        Command::AddBalances { balances } | Command::NetWorth { balances } => {
            DataPaths::resolve(args.data_dir.clone(), balances.clone(), None, None, None)
        }
    };
    let _guard = logging::init_logging(paths.data_dir(), &args.log_level)?;

    match args.command {
        Command::Project { .. } => run_projection(&paths),
        Command::AddBalances { .. } => entry::run(paths.balances()),
        Command::NetWorth { .. } => print_net_worth(paths.balances()),
    }
}

fn run_projection(paths: &DataPaths) -> Result<()> {
    let ledger = Ledger::load(paths.balances())?;
    let start = ledger.starting_balances()?;
    let schedule = schedule_csv::load(paths.schedule())?;
    let assumptions = settings::load(paths.assumptions())?;

    tracing::info!(start_month = %start.month(), "running projection");
    let projection = firecast_core::project(&start, &schedule, &assumptions)?;
    export::write_csv(paths.output(), &projection)?;

    if let (Some(first), Some(last)) = (projection.first(), projection.last()) {
        println!(
            "Projected {} months ({} through {})",
            projection.len(),
            first.date,
            last.date
        );
        println!(
            "Final net worth: {} nominal, {} real",
            format_currency(last.net_worth),
            format_currency(last.net_worth_real)
        );
        println!("Wrote {}", paths.output().display());
    }
    Ok(())
}

fn print_net_worth(path: &Path) -> Result<()> {
    let ledger = Ledger::load(path)?;
    for (date, net_worth) in ledger.net_worth_series() {
        println!("{date}  {}", format_currency(net_worth));
    }
    Ok(())
}
