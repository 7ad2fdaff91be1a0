use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clap::Subcommand;
use payslip::{dto, format, report};

#[derive(Parser)]
#[command()]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Location of the payslip input file
    #[arg(long = "payslip-path", default_value = "payslip.yaml", global = true)]
    payslip_path: String,

    /// Increase log output (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Render the payslip as text
    Render(RenderArgs),

    /// Print an amount formatted as currency and spelled out in words
    Words(WordsArgs),
}

#[derive(Parser)]
struct RenderArgs {
    /// Destination file name, stdout when omitted
    #[arg(long = "destination")]
    pub destination: Option<String>,
}

#[derive(Parser)]
struct WordsArgs {
    /// Amount in rupees, e.g. 74400.50
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run_command(command: Command, payslip_path: &Path) -> anyhow::Result<()> {
    match command {
        Command::Render(args) => {
            let slip = dto::load_slip(payslip_path)?;
            let payslip = report::slip::Payslip::new(&slip)
                .with_context(|| format!("Cannot render payslip for {}", slip.employee.name))?;

            debug!(summary = ?payslip.summary(), "computed pay summary");

            match args.destination {
                Some(destination) => {
                    let destination = PathBuf::from(&destination);
                    payslip.print_to_file(&destination)?;

                    info!(employee = %slip.employee.name, "wrote payslip");
                    println!("Wrote payslip to {:?}", destination);
                }
                None => print!("{}", payslip),
            }
        }
        Command::Words(args) => {
            let formatted = format::currency::format_currency(args.amount)?;
            let words = format::words::rupees_in_words(args.amount)?;

            println!("{}", formatted);
            println!("{}", words);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose);

    run_command(args.command, Path::new(&args.payslip_path))
}
