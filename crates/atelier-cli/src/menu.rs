//! The single-shot interactive menu.
//!
//! One session shows the menu, reads a selection, loads the artist file,
//! asks for the query parameter and prints the result. Input and output are
//! generic so sessions can be driven from tests.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atelier_core::{evaluate, Catalog, Query, QueryKind};

use crate::config::Config;
use crate::render;

pub const LINE: &str = "\n--------------------------------------------------------------\n";

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// A query ran (even if it found nothing).
    Continue,
    /// The user picked something other than a query.
    Exit,
}

/// Read one line, without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;
    read_line(input)
}

pub fn display_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nPlease select one of the following options.\n")?;
    for kind in QueryKind::ALL {
        writeln!(output, "{}. {}", kind.menu_code(), render::description(kind))?;
    }
    writeln!(output)?;
    writeln!(output, "Press any other key to exit.")
}

/// Open the artist file, asking for another path while it cannot be opened.
///
/// A blank reply, or the end of input, gives up with the last error.
pub fn open_with_retry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    data_path: &Path,
) -> Result<Catalog> {
    let mut path = data_path.to_path_buf();
    loop {
        match Catalog::open(&path) {
            Ok(catalog) => return Ok(catalog),
            Err(err) if err.is_source_unavailable() => {
                log::warn!("{}", err);
                writeln!(output, "Error opening file")?;
                match ask(input, output, "Enter a file name (blank to give up): ")? {
                    Some(reply) if !reply.trim().is_empty() => path = PathBuf::from(reply.trim()),
                    _ => {
                        return Err(err)
                            .with_context(|| format!("Failed to open {}", path.display()));
                    }
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Run one menu session.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
    json: bool,
) -> Result<MenuOutcome> {
    display_menu(output)?;

    let Some(selection) = read_line(input)? else {
        return Ok(MenuOutcome::Exit);
    };
    let Some(kind) = QueryKind::from_menu_code(&selection) else {
        log::debug!("Menu selection {:?} is not a query, exiting", selection);
        return Ok(MenuOutcome::Exit);
    };

    writeln!(output, "{LINE}")?;

    let catalog = open_with_retry(input, output, &config.data_path)?;

    let raw = ask(input, output, render::prompt(kind))?.unwrap_or_default();

    match Query::parse(kind, &raw) {
        Ok(query) => {
            let outcome = evaluate(catalog.artists(), &query, config.case_sensitive);
            if json {
                render::write_json(output, &outcome)?;
            } else {
                render::write_outcome(output, kind, &outcome)?;
            }
        }
        Err(err) if err.is_invalid_input() => {
            log::debug!("{}", err);
            writeln!(output, "{}", render::INVALID_YEAR)?;
        }
        Err(err) => return Err(err.into()),
    }

    writeln!(output, "{LINE}")?;
    Ok(MenuOutcome::Continue)
}
