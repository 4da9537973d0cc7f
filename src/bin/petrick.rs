use clap::error::ErrorKind as UsageKind;
use clap::{CommandFactory, Parser};
use color_eyre::Result;
use log::debug;

use petrick_rs::error::ErrorKind;
use petrick_rs::function::Function;
use petrick_rs::list::ValueList;
use petrick_rs::reduce::reduce;
use petrick_rs::render::RenderConfig;

#[derive(Parser)]
#[command(name = "petrick", author, version, about = "Minimize a boolean function with Quine-McCluskey and Petrick's method")]
struct Cli {
    /// Number of inputs
    #[arg(value_name = "N")]
    width: u32,

    /// Required inputs, e.g. "[1,2,5]"
    #[arg(value_name = "MINTERMS")]
    minterms: ValueList,

    /// Don't-care inputs, e.g. "[]"
    #[arg(value_name = "DONT_CARES")]
    dont_cares: ValueList,

    /// Debug logging and the implicant table
    #[arg(short, long)]
    verbose: bool,

    /// Color literals instead of marking complements
    #[arg(short, long)]
    colored: bool,

    /// Print the function's truth table first
    #[arg(short = 't', long = "table")]
    table: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = if cli.colored {
        RenderConfig::colored()
    } else {
        RenderConfig::plain()
    };

    let outcome = Function::new("Q", cli.width, &cli.minterms.0, &cli.dont_cares.0).and_then(|mut function| {
        if cli.table {
            print!("{}", function.truth_table());
        }
        let reduction = reduce(&mut function)?;
        if cli.verbose {
            print!("{}", function.implicant_table());
        }
        Ok(reduction)
    });

    match outcome {
        Ok(reduction) => {
            debug!("{} alternative cover(s)", reduction.alternatives);
            println!("{}", reduction.line(&config));
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::InvalidInput => Cli::command().error(UsageKind::ValueValidation, e).exit(),
        Err(e) => Err(e.into()),
    }
}
