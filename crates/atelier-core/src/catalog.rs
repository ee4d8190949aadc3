//! Dataset loader for the artist file.
//!
//! The file is a header line followed by one comma-delimited row per
//! artist:
//!
//! ```text
//! id,name,years,genre,nationality,biography,reference,total_paintings
//! 1,Pablo Picasso,1881-1973,Cubism,Spanish,A prolific painter.,https://en.wikipedia.org/wiki/Pablo_Picasso,1885
//! ```
//!
//! The header is discarded without being checked. Fields are split on every
//! comma and trimmed; quotes have no special meaning, so a field can never
//! contain a comma. Rows that do not produce exactly eight fields, or whose
//! `id` or `total_paintings` is not a non-negative integer, are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::error::{Error, Result};
use crate::model::Artist;

/// Number of columns in a well-formed row.
pub const FIELD_COUNT: usize = 8;

const STREAM_NAME: &str = "input stream";

/// An immutable, ordered collection of artists loaded from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artists: Vec<Artist>,
    skipped: usize,
}

impl Catalog {
    /// Open and load the artist file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the file cannot be opened or read.
    /// Malformed rows are skipped, never reported as errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            source_name: source_name.clone(),
            source,
        })?;
        Self::read(file, &source_name)
    }

    /// Load artists from any readable stream positioned at the header line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read(reader, STREAM_NAME)
    }

    fn read<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let unavailable = |source| Error::SourceUnavailable {
            source_name: source_name.to_string(),
            source,
        };

        // The header is exactly the first physical line, blank or not.
        let mut reader = BufReader::new(reader);
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header).map_err(unavailable)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut artists = Vec::new();
        let mut skipped = 0;
        let mut record = ByteRecord::new();

        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => return Err(unavailable(err.into())),
            }

            let line = record.position().map_or(0, |pos| pos.line()) + 1;
            match parse_row(&record) {
                Ok(artist) => artists.push(artist),
                Err(err) => {
                    log::debug!("Skipping row in {}: {}", source_name, err.at_line(line));
                    skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded {} artists from {} ({} rows skipped)",
            artists.len(),
            source_name,
            skipped
        );

        Ok(Self { artists, skipped })
    }

    /// The loaded artists, in file row order.
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Number of data rows dropped as malformed.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artist> {
        self.artists.iter()
    }

    #[must_use]
    pub fn into_artists(self) -> Vec<Artist> {
        self.artists
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Artist;
    type IntoIter = std::slice::Iter<'a, Artist>;

    fn into_iter(self) -> Self::IntoIter {
        self.artists.iter()
    }
}

/// Load every well-formed artist row from `reader`.
///
/// # Errors
///
/// Returns `SourceUnavailable` if the stream cannot be read.
pub fn load<R: Read>(reader: R) -> Result<Vec<Artist>> {
    Catalog::from_reader(reader).map(Catalog::into_artists)
}

fn parse_row(record: &ByteRecord) -> Result<Artist> {
    if record.len() != FIELD_COUNT {
        return Err(Error::malformed(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        )));
    }

    record
        .deserialize::<Artist>(None)
        .map_err(|err| Error::malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,years,genre,nationality,biography,reference,total_paintings\n";

    fn catalog(rows: &str) -> Catalog {
        Catalog::from_reader(format!("{HEADER}{rows}").as_bytes()).unwrap()
    }

    #[test]
    fn test_load_single_row() {
        let catalog = catalog(
            "1,Pablo Picasso,1881-1973,Cubism,Spanish,A prolific painter.,https://en.wikipedia.org/wiki/Pablo_Picasso,1885\n",
        );

        assert_eq!(catalog.len(), 1);
        let artist = &catalog.artists()[0];
        assert_eq!(artist.id, 1);
        assert_eq!(artist.name, "Pablo Picasso");
        assert_eq!(artist.years, "1881-1973");
        assert_eq!(artist.genre, "Cubism");
        assert_eq!(artist.nationality, "Spanish");
        assert_eq!(artist.biography, "A prolific painter.");
        assert_eq!(artist.reference, "https://en.wikipedia.org/wiki/Pablo_Picasso");
        assert_eq!(artist.total_paintings, 1885);
    }

    #[test]
    fn test_load_trims_fields() {
        let row = "  2 , Vincent van Gogh ,1853-1890, Post-Impressionism ,Dutch,Bio, ref ,  877  \n";
        let catalog = catalog(row);
        let artist = &catalog.artists()[0];
        assert_eq!(artist.id, 2);
        assert_eq!(artist.name, "Vincent van Gogh");
        assert_eq!(artist.genre, "Post-Impressionism");
        assert_eq!(artist.reference, "ref");
        assert_eq!(artist.total_paintings, 877);
    }

    #[test]
    fn test_header_is_not_validated() {
        let input = "whatever\n3,Claude Monet,1840-1926,Impressionism,French,Bio,ref,1365\n";
        let catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.artists()[0].name, "Claude Monet");
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let input = "\n1,A,1900,G,N,B,R,1\n2,B,1900,G,N,B,R,2\n";
        let catalog = Catalog::from_reader(input.as_bytes()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(catalog.skipped(), 0);
    }

    #[test]
    fn test_header_only_input_is_empty() {
        let catalog = Catalog::from_reader(HEADER.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_catalog_iterates_by_reference() {
        let catalog = catalog("1,A,1900,G,N,B,R,1\n2,B,1900,G,N,B,R,2\n");
        let mut total = 0;
        for artist in &catalog {
            total += artist.total_paintings;
        }
        assert_eq!(total, 3);
    }

    #[test]
    fn test_wrong_field_count_is_skipped() {
        let catalog = catalog(
            "1,A,1900,G,N,B,R,1\n\
             2,B,1900,G,N,B,1\n\
             3,C,1900,G,N,B,R,1,extra\n\
             4,D,1900,G,N,B,R,4\n",
        );
        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
        assert_eq!(catalog.skipped(), 2);
    }

    #[test]
    fn test_non_numeric_id_is_skipped() {
        let catalog = catalog("x,A,1900,G,N,B,R,1\n2,B,1900,G,N,B,R,2\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.artists()[0].id, 2);
        assert_eq!(catalog.skipped(), 1);
    }

    #[test]
    fn test_non_numeric_or_negative_paintings_is_skipped() {
        let catalog = catalog("1,A,1900,G,N,B,R,many\n2,B,1900,G,N,B,R,-3\n3,C,1900,G,N,B,R,3\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.artists()[0].name, "C");
        assert_eq!(catalog.skipped(), 2);
    }

    #[test]
    fn test_quotes_are_not_special() {
        let catalog = catalog("1,\"Picasso, Pablo\",1881-1973,Cubism,Spanish,B,R,1\n");
        assert!(catalog.is_empty(), "an embedded comma yields nine fields");
    }

    #[test]
    fn test_crlf_line_endings() {
        let catalog = Catalog::from_reader(
            "id,name,years,genre,nationality,biography,reference,total_paintings\r\n1,A,1900,G,N,B,R,1\r\n2,B,1901,G,N,B,R,2\r\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.artists()[1].total_paintings, 2);
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        let catalog = Catalog::from_reader("".as_bytes()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped(), 0);
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"1,\xff\xfe,1900,G,N,B,R,1\n2,B,1900,G,N,B,R,2\n");
        let catalog = Catalog::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.artists()[0].name, "B");
    }

    #[test]
    fn test_load_returns_plain_vec() {
        let artists = load(format!("{HEADER}1,A,1900,G,N,B,R,1\n").as_bytes()).unwrap();
        assert_eq!(artists.len(), 1);
    }

    #[test]
    fn test_open_missing_file_is_source_unavailable() {
        let err = Catalog::open("/definitely/not/here/artists.csv").unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let catalog = catalog("1,A,1900,G,N,B,R,1\n1,B,1900,G,N,B,R,1\n");
        assert_eq!(catalog.len(), 2);
    }
}
