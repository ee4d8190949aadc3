//! One function per query kind.
//!
//! Every function is a single pass over the slice and preserves its order.
//! An empty result means "no match"; none of them fail.

use crate::model::Artist;

use super::rules::{CaseRules, Matcher};

fn named<'a>(
    artists: &'a [Artist],
    name: &str,
    rules: CaseRules,
) -> impl Iterator<Item = &'a Artist> + 'a {
    let matcher = Matcher::new(name, rules.name);
    artists
        .iter()
        .filter(move |artist| matcher.matches(&artist.name))
}

/// Every artist whose name matches `name`.
pub fn artist_info<'a>(artists: &'a [Artist], name: &str, rules: CaseRules) -> Vec<&'a Artist> {
    named(artists, name, rules).collect()
}

/// Names of artists whose genre matches `genre`.
pub fn by_genre<'a>(artists: &'a [Artist], genre: &str, rules: CaseRules) -> Vec<&'a str> {
    let matcher = Matcher::new(genre, rules.genre);
    artists
        .iter()
        .filter(|artist| matcher.matches(&artist.genre))
        .map(|artist| artist.name.as_str())
        .collect()
}

/// Names of artists whose nationality matches `nationality`.
pub fn by_nationality<'a>(
    artists: &'a [Artist],
    nationality: &str,
    rules: CaseRules,
) -> Vec<&'a str> {
    let matcher = Matcher::new(nationality, rules.nationality);
    artists
        .iter()
        .filter(|artist| matcher.matches(&artist.nationality))
        .map(|artist| artist.name.as_str())
        .collect()
}

/// Names of artists active in `year`.
///
/// A record whose `years` field cannot be interpreted is left out; the rest
/// of the slice is still searched.
pub fn by_year(artists: &[Artist], year: i32) -> Vec<&str> {
    artists
        .iter()
        .filter(|artist| match artist.active_years() {
            Ok(years) => years.contains(year),
            Err(err) => {
                log::debug!("Skipping {} (id {}) for year lookup: {}", artist.name, artist.id, err);
                false
            }
        })
        .map(|artist| artist.name.as_str())
        .collect()
}

pub fn biography<'a>(artists: &'a [Artist], name: &str, rules: CaseRules) -> Vec<&'a str> {
    named(artists, name, rules)
        .map(|artist| artist.biography.as_str())
        .collect()
}

pub fn reference<'a>(artists: &'a [Artist], name: &str, rules: CaseRules) -> Vec<&'a str> {
    named(artists, name, rules)
        .map(|artist| artist.reference.as_str())
        .collect()
}

pub fn total_paintings(artists: &[Artist], name: &str, rules: CaseRules) -> Vec<u32> {
    named(artists, name, rules)
        .map(|artist| artist.total_paintings)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picasso() -> Artist {
        Artist::new(1, "Pablo Picasso")
            .with_years("1881-1973")
            .with_genre("Cubism")
            .with_nationality("Spanish")
            .with_biography("A prolific painter.")
            .with_reference("https://en.wikipedia.org/wiki/Pablo_Picasso")
            .with_total_paintings(1885)
    }

    fn sample() -> Vec<Artist> {
        vec![
            picasso(),
            Artist::new(2, "Juan Gris")
                .with_years("1887-1927")
                .with_genre("cubism")
                .with_nationality("spanish"),
            Artist::new(3, "Year Only")
                .with_years("1900")
                .with_genre("Symbolism")
                .with_nationality("French"),
            Artist::new(4, "Broken Years")
                .with_years("18??-1950")
                .with_genre("Cubism")
                .with_nationality("Spanish"),
        ]
    }

    #[test]
    fn test_artist_info_ignores_case() {
        let artists = sample();
        let plain = artist_info(&artists, "Pablo Picasso", CaseRules::default());
        let upper = artist_info(&artists, "PABLO PICASSO", CaseRules::default());
        assert_eq!(plain.len(), 1);
        assert_eq!(plain, upper);
        assert_eq!(plain[0], &picasso());
    }

    #[test]
    fn test_artist_info_case_sensitive_rule() {
        let artists = sample();
        let rules = CaseRules::default().with_name(true);
        assert!(artist_info(&artists, "PABLO PICASSO", rules).is_empty());
        assert_eq!(artist_info(&artists, "Pablo Picasso", rules).len(), 1);
    }

    #[test]
    fn test_artist_info_returns_every_duplicate() {
        let mut artists = sample();
        artists.push(picasso().with_total_paintings(1));
        let found = artist_info(&artists, "pablo picasso", CaseRules::default());
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].total_paintings, 1);
    }

    #[test]
    fn test_by_genre_ignores_case_and_keeps_order() {
        let artists = sample();
        assert_eq!(
            by_genre(&artists, "CUBISM", CaseRules::default()),
            vec!["Pablo Picasso", "Juan Gris", "Broken Years"]
        );
    }

    #[test]
    fn test_by_genre_case_sensitive_rule() {
        let artists = sample();
        let rules = CaseRules::default().with_genre(true);
        assert_eq!(by_genre(&artists, "cubism", rules), vec!["Juan Gris"]);
    }

    #[test]
    fn test_by_nationality_is_case_sensitive_by_default() {
        let artists = sample();
        assert_eq!(
            by_nationality(&artists, "Spanish", CaseRules::default()),
            vec!["Pablo Picasso", "Broken Years"]
        );
        assert_eq!(
            by_nationality(&artists, "spanish", CaseRules::default()),
            vec!["Juan Gris"]
        );
    }

    #[test]
    fn test_by_nationality_insensitive_rule() {
        let artists = sample();
        let rules = CaseRules::default().with_nationality(false);
        assert_eq!(
            by_nationality(&artists, "SPANISH", rules),
            vec!["Pablo Picasso", "Juan Gris", "Broken Years"]
        );
    }

    #[test]
    fn test_by_year_matches_range_and_single() {
        let artists = sample();
        assert_eq!(
            by_year(&artists, 1900),
            vec!["Pablo Picasso", "Juan Gris", "Year Only"]
        );
    }

    #[test]
    fn test_by_year_outside_range() {
        let artists = sample();
        assert!(by_year(&artists, 1980).is_empty());
        assert_eq!(by_year(&artists, 1973), vec!["Pablo Picasso"]);
    }

    #[test]
    fn test_by_year_skips_malformed_years_only() {
        let artists = sample();
        // "Broken Years" would cover 1940 if its birth year were readable.
        assert_eq!(by_year(&artists, 1940), vec!["Pablo Picasso"]);
    }

    #[test]
    fn test_name_keyed_field_lookups() {
        let artists = sample();
        let rules = CaseRules::default();
        assert_eq!(biography(&artists, "pablo picasso", rules), vec!["A prolific painter."]);
        assert_eq!(
            reference(&artists, "Pablo picasso", rules),
            vec!["https://en.wikipedia.org/wiki/Pablo_Picasso"]
        );
        assert_eq!(total_paintings(&artists, "PABLO PICASSO", rules), vec![1885]);
    }

    #[test]
    fn test_absent_name_is_empty_everywhere() {
        let artists = sample();
        let rules = CaseRules::default();
        assert!(artist_info(&artists, "Rembrandt", rules).is_empty());
        assert!(biography(&artists, "Rembrandt", rules).is_empty());
        assert!(reference(&artists, "Rembrandt", rules).is_empty());
        assert!(total_paintings(&artists, "Rembrandt", rules).is_empty());
    }

    #[test]
    fn test_no_partial_name_matching() {
        let artists = sample();
        assert!(artist_info(&artists, "Picasso", CaseRules::default()).is_empty());
    }

    #[test]
    fn test_empty_slice() {
        assert!(by_genre(&[], "Cubism", CaseRules::default()).is_empty());
        assert!(by_year(&[], 1900).is_empty());
    }
}
