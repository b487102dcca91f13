use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::domain::{Person, SortField};
use table_core::{PersonSorter, SortSelector};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Sort and generate people tables from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a people file ordered by one field.
    Sort {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = SortField::Id)]
        field: SortField,
        #[arg(long, default_value = "en")]
        locale: String,
        #[arg(long)]
        json: bool,
    },
    /// Write deterministic sample people to a JSON file.
    Generate {
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        output: PathBuf,
    },
    /// List the sortable fields and their labels.
    Fields,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sort {
            input,
            field,
            locale,
            json,
        } => {
            let people = dataset::load_people(&input)
                .with_context(|| format!("failed to load '{}'", input.display()))?;
            let sorter = PersonSorter::for_locale(&locale)
                .with_context(|| format!("unsupported locale '{locale}'"))?;
            let sorted = sorter.sort(&people, field);
            if json {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                print!("{}", render_table(&sorted));
            }
        }
        Command::Generate {
            count,
            seed,
            output,
        } => {
            let people = dataset::generate_people(count, seed);
            dataset::save_people(&output, &people)?;
            println!("wrote {} people to {}", people.len(), output.display());
        }
        Command::Fields => {
            for option in SortSelector::options() {
                println!("{:<10} {}", option.field, option.label);
            }
        }
    }

    Ok(())
}

fn render_table(rows: &[Person]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.first_name.clone(),
                p.last_name.clone(),
                p.email.clone(),
                p.phone.clone(),
            ]
        })
        .collect();

    let headers = SortSelector::options().iter().map(|o| o.label);
    let mut widths: Vec<usize> = headers.clone().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    for row in &cells {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
