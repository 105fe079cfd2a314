//! # Square Footage Worksheet CLI
//!
//! Line-oriented front end for the worksheet. Reads commands from stdin
//! (interactive or piped), forwards edits and deletions to the worksheet and
//! prints the events it reports back.
//!
//! ```text
//! $ printf 'h 1 36\nw 1 24\nshow\n' | sqft --quiet
//! ```

mod command;
mod config;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver};

use clap::Parser;
use tracing::debug;

use sqft_core::{SheetResult, TableEvent, Worksheet, WorksheetSettings};

use command::{Command, HELP};
use config::CliConfig;
use render::render_table;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = CliConfig::parse();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> SheetResult<()> {
    let mut sheet = Worksheet::new(config.title.clone(), config.settings());

    let (tx, events) = mpsc::channel();
    sheet.subscribe(move |event: &TableEvent| {
        let _ = tx.send(event.clone());
    });

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !config.quiet;
    let mut stdout = io::stdout().lock();

    if !config.quiet {
        writeln!(stdout, "Square Footage Worksheet - {}", sheet.meta.title)?;
        writeln!(stdout, "Type 'help' for commands.")?;
        writeln!(stdout)?;
        write!(stdout, "{}", render_table(&sheet))?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Edit { id, field, value } => {
                sheet.edit_row(id, field, value);
            }
            Command::Delete(id) => {
                sheet.delete_row(id);
            }
            Command::Rearm(rearm_after_delete) => {
                sheet.set_settings(WorksheetSettings { rearm_after_delete });
                if !config.quiet {
                    writeln!(stdout, "  Re-arm after delete: {}", on_off(sheet.settings().rearm_after_delete))?;
                }
            }
            Command::Show => write!(stdout, "{}", render_table(&sheet))?,
            Command::Json => print_json(&mut stdout, &sheet)?,
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Quit => break,
            Command::Nothing => continue,
        }

        report_events(&mut stdout, &events, config.quiet)?;
        if config.json {
            print_json(&mut stdout, &sheet)?;
        }
    }

    if !config.quiet {
        writeln!(stdout)?;
        write!(stdout, "{}", render_table(&sheet))?;
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Print the events produced by the last command, one per line
fn report_events(out: &mut impl Write, events: &Receiver<TableEvent>, quiet: bool) -> SheetResult<()> {
    for event in events.try_iter() {
        if !quiet {
            writeln!(out, "  {}", event.describe())?;
        }
    }
    Ok(())
}

fn print_json(out: &mut impl Write, sheet: &Worksheet) -> SheetResult<()> {
    let json = serde_json::to_string_pretty(&sheet.snapshot())?;
    writeln!(out, "{}", json)?;
    Ok(())
}
