use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use log::{debug, error};

use petrick_rs::list::ValueList;
use petrick_rs::reduce::reduce;
use petrick_rs::render::RenderConfig;
use petrick_rs::truth_table::TruthTable;

#[derive(Parser)]
#[command(name = "logic-reducer", author, version, about = "Reduce every output column of a truth table")]
struct Cli {
    /// Truth table file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Debug logging, the per-column input lists and implicant tables
    #[arg(short, long)]
    verbose: bool,

    /// Color literals instead of marking complements
    #[arg(short, long)]
    colored: bool,
}

fn main() -> Result<ExitCode> {
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

    let table = TruthTable::load(&cli.file)?;
    debug!(
        "Loaded {} input(s) and {} output(s) from {:?}",
        table.width,
        table.columns.len(),
        cli.file
    );

    let mut failed = 0;
    for (index, (column, function)) in table.columns.iter().zip(table.functions()).enumerate() {
        if cli.verbose {
            println!("{}: {}", column.name, ValueList(column.minterms.clone()));
            println!("DNC{}: {}", index, ValueList(column.dont_cares.clone()));
        }

        match function.and_then(|mut f| {
            let reduction = reduce(&mut f)?;
            if cli.verbose {
                print!("{}", f.implicant_table());
            }
            Ok(reduction)
        }) {
            Ok(reduction) => println!("{}", reduction.line(&config)),
            Err(e) => {
                error!("{}: {}", column.name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        error!("{} of {} column(s) failed", failed, table.columns.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
