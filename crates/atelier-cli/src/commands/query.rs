use anyhow::{Context, Result};
use atelier_core::{evaluate, CaseRules, Catalog, Query, QueryKind};

use crate::config::Config;
use crate::render;

/// Per-query override of the configured case sensitivity.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct MatchArgs {
    /// Match letter case exactly for this query
    #[arg(long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Ignore letter case for this query
    #[arg(long)]
    pub ignore_case: bool,
}

impl MatchArgs {
    const fn choice(self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.ignore_case {
            Some(false)
        } else {
            None
        }
    }

    /// Apply the override to the field `kind` matches on.
    pub fn apply(self, kind: QueryKind, rules: CaseRules) -> CaseRules {
        let Some(sensitive) = self.choice() else {
            return rules;
        };
        match kind {
            QueryKind::ByGenre => rules.with_genre(sensitive),
            QueryKind::ByNationality => rules.with_nationality(sensitive),
            kind if kind.is_name_keyed() => rules.with_name(sensitive),
            _ => rules,
        }
    }
}

/// Load the artist file once and answer one query from the command line.
pub fn run_query(
    config: &Config,
    kind: QueryKind,
    raw: &str,
    matching: MatchArgs,
    json: bool,
) -> Result<()> {
    let query = match Query::parse(kind, raw) {
        Ok(query) => query,
        Err(err) if err.is_invalid_input() => {
            anyhow::bail!("{} ({})", render::INVALID_YEAR, err);
        }
        Err(err) => return Err(err.into()),
    };

    let catalog = Catalog::open(&config.data_path)
        .with_context(|| format!("Failed to load artists from {}", config.data_path.display()))?;

    let rules = matching.apply(kind, config.case_sensitive);
    log::debug!("Running {} with {:?}", kind, rules);
    let outcome = evaluate(catalog.artists(), &query, rules);

    let mut out = std::io::stdout().lock();
    if json {
        render::write_json(&mut out, &outcome)?;
    } else {
        render::write_outcome(&mut out, kind, &outcome)?;
    }

    Ok(())
}
