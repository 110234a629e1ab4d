use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use env_logger::Env;
use labcal::{
    cli::{Cli, Commands},
    export::{export_calendar, output_path},
    init::init_template,
    schedule::PeriodTable,
    select::{ConsoleSelector, DEFAULT_INPUT, SourceChoice, pick_csv, prompt_source},
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Init { filename }) = &cli.command {
        let path = init_template(filename)?;
        println!("Created {}", style(path.display()).green());
        return Ok(());
    }

    let table = match &cli.periods {
        Some(path) => PeriodTable::load(path)
            .with_context(|| format!("cannot use period file {}", path.display()))?,
        None => PeriodTable::standard(),
    };

    let input = match cli.input.clone() {
        Some(path) => path,
        None => choose_input()?,
    };
    let output = output_path(cli.output.clone());

    let summary = export_calendar(&input, &output, &table, cli.policy)?;
    println!(
        "{} {} of {} rows written to {}",
        style("✓").green().bold(),
        summary.written(),
        summary.rows,
        style(output.display()).cyan()
    );
    if summary.skipped > 0 {
        println!(
            "  {} rows skipped, see the warnings above",
            style(summary.skipped).yellow()
        );
    }
    Ok(())
}

fn choose_input() -> Result<PathBuf> {
    let dir = Path::new(".");
    match prompt_source()? {
        SourceChoice::Browse => {
            let mut selector = ConsoleSelector::new(dir);
            Ok(dir.join(pick_csv(&mut selector)?))
        }
        SourceChoice::Default => Ok(dir.join(DEFAULT_INPUT)),
    }
}
