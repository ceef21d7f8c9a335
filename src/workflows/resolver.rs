use std::collections::HashMap;

use rustyline::DefaultEditor;
use thiserror::Error;

use crate::domain::models::{EpisodeDescriptor, ResolvedMatch, SeriesCandidate};
use crate::infra::tvdb::{Catalog, CatalogError};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid input.")]
    InvalidSelection,
    #[error("failed to read selection: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Outcome of matching one descriptor against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(ResolvedMatch),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoSeriesMatch,
    NoEpisodeMatch,
    Ignored,
}

/// What the user (or a scripted stand-in) decided for a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the candidate list.
    Pick(usize),
    Ignore,
}

/// Strategy seam for disambiguation so batch logic is testable without a
/// terminal.
pub trait CandidateSelector {
    fn select(
        &mut self,
        raw_name: &str,
        candidates: &[SeriesCandidate],
    ) -> Result<Selection, ResolveError>;
}

/// Maps raw prompt input to a choice. Candidates are numbered from 1;
/// empty input picks the first, "i" ignores the file.
pub fn parse_selection(input: &str, candidate_count: usize) -> Result<Selection, ResolveError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Selection::Pick(0));
    }
    if input == "i" {
        return Ok(Selection::Ignore);
    }
    let choice: usize = input.parse().map_err(|_| ResolveError::InvalidSelection)?;
    if choice < 1 || choice > candidate_count {
        return Err(ResolveError::InvalidSelection);
    }
    Ok(Selection::Pick(choice - 1))
}

/// Interactive selector backed by the terminal.
pub struct ConsoleSelector;

impl CandidateSelector for ConsoleSelector {
    fn select(
        &mut self,
        raw_name: &str,
        candidates: &[SeriesCandidate],
    ) -> Result<Selection, ResolveError> {
        for (count, candidate) in candidates.iter().enumerate() {
            match candidate.year {
                Some(year) => println!("({}) {} ({})", count + 1, candidate.display_name, year),
                None => println!("({}) {}", count + 1, candidate.display_name),
            }
        }
        let prompt = format!("Select correct series for {raw_name} (\"i\" to ignore): ");
        let input = DefaultEditor::new()?.readline(&prompt)?;
        parse_selection(&input, candidates.len())
    }
}

/// Resolves descriptors against the catalog, remembering the chosen series
/// per raw show name for the rest of the run.
pub struct Resolver<C, S> {
    catalog: C,
    selector: S,
    matches: HashMap<String, SeriesCandidate>,
}

impl<C: Catalog, S: CandidateSelector> Resolver<C, S> {
    pub fn new(catalog: C, selector: S) -> Self {
        Self {
            catalog,
            selector,
            matches: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, descriptor: &EpisodeDescriptor) -> Result<Resolution, ResolveError> {
        let chosen = match self.matches.get(&descriptor.raw_name) {
            Some(previous) => {
                println!(
                    "Using previous match {} for {}",
                    previous.display_name, descriptor.raw_name
                );
                previous.clone()
            }
            None => {
                let candidates = self.catalog.search_series(&descriptor.raw_name)?;
                if candidates.is_empty() {
                    return Ok(Resolution::Skipped(SkipReason::NoSeriesMatch));
                }
                let chosen = if candidates.len() == 1 {
                    candidates[0].clone()
                } else {
                    match self.selector.select(&descriptor.raw_name, &candidates)? {
                        Selection::Pick(index) => candidates[index].clone(),
                        // An ignore answers this file only, so it is not
                        // cached; the next file with this name asks again.
                        Selection::Ignore => return Ok(Resolution::Skipped(SkipReason::Ignored)),
                    }
                };
                self.matches
                    .insert(descriptor.raw_name.clone(), chosen.clone());
                chosen
            }
        };

        let title = match self
            .catalog
            .lookup_episode(chosen.id, descriptor.season, descriptor.episode)?
        {
            Some(title) => title,
            None => return Ok(Resolution::Skipped(SkipReason::NoEpisodeMatch)),
        };

        Ok(Resolution::Matched(ResolvedMatch {
            series: chosen,
            episode_title: title,
        }))
    }
}
