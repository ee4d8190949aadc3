//! Console text for menus, prompts and query results.

use std::io::{self, Write};

use atelier_core::{Artist, QueryKind, QueryOutcome};

/// One-line menu description for `kind`.
pub const fn description(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::ArtistInfo => "Show an artist's general information.",
        QueryKind::ByGenre => "Show a list of artists by genre.",
        QueryKind::ByNationality => "Show a list of artists by nationality.",
        QueryKind::ByYear => "Show a list of artists by year.",
        QueryKind::Biography => "Show the artist's biography.",
        QueryKind::Reference => "Show an external link for more information about the artist.",
        QueryKind::TotalPaintings => "Show the total number of the artist's paintings.",
    }
}

/// The question asked before running `kind`.
pub const fn prompt(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::ArtistInfo => "Enter the artist's full name: ",
        QueryKind::ByGenre => "Enter a genre: ",
        QueryKind::ByNationality => "Enter a nationality: ",
        QueryKind::ByYear => "Enter year: ",
        QueryKind::Biography | QueryKind::Reference | QueryKind::TotalPaintings => {
            "Enter artist name: "
        }
    }
}

/// Heading printed above a non-empty list of names.
pub const fn heading(kind: QueryKind) -> Option<&'static str> {
    match kind {
        QueryKind::ByGenre => Some("Artists by Genre:"),
        QueryKind::ByNationality => Some("Artists by Nationality:"),
        QueryKind::ByYear => Some("Artists by Year:"),
        _ => None,
    }
}

/// Line printed when `kind` found nothing.
pub const fn not_found(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::ByGenre => "There are no artists under that genre.",
        QueryKind::ByNationality => "There are no artists of that nationality.",
        QueryKind::ByYear => "There are no artists active in that year.",
        QueryKind::ArtistInfo
        | QueryKind::Biography
        | QueryKind::Reference
        | QueryKind::TotalPaintings => "There is no artist with that name.",
    }
}

pub const INVALID_YEAR: &str = "Please enter a valid year.";

/// The multi-line detail block for one artist.
pub fn detail_block(artist: &Artist) -> String {
    format!(
        "Details on {}:\n\
         Years: {}\n\
         Genre: {}\n\
         Nationality: {}\n\
         Bio: {}\n\
         Wikipedia Link: {}\n\
         Number of Paintings: {}\n",
        artist.name,
        artist.years,
        artist.genre,
        artist.nationality,
        artist.biography,
        artist.reference,
        artist.total_paintings,
    )
}

/// Print the outcome of a `kind` query as text.
pub fn write_outcome<W: Write>(
    out: &mut W,
    kind: QueryKind,
    outcome: &QueryOutcome,
) -> io::Result<()> {
    if outcome.is_empty() {
        return writeln!(out, "{}", not_found(kind));
    }

    match outcome {
        QueryOutcome::Details(artists) => {
            for (i, artist) in artists.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", detail_block(artist))?;
            }
        }
        QueryOutcome::Names(names) => {
            if let Some(heading) = heading(kind) {
                writeln!(out, "{heading}")?;
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        QueryOutcome::Texts(texts) => {
            for text in texts {
                writeln!(out, "{text}")?;
            }
        }
        QueryOutcome::Counts(counts) => {
            for count in counts {
                writeln!(out, "{count}")?;
            }
        }
    }

    Ok(())
}

/// Print the outcome as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, outcome: &QueryOutcome) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)
}
