use std::collections::HashMap;
use std::io;

use log::{debug, info, warn};

use crate::remote::{ReleaseSource, RemoteRelease, RemoteReleaseGroup};

use super::prompt::{Disambiguator, SelectionInput, describe_candidate, parse_selection};

/// Everything one matching pass needs, fixed for the duration of the pass.
pub struct MatchingContext<'a> {
    pub artist_query: Option<String>,
    pub album_query: String,
    pub local_track_count: usize,
    /// Upper bound on search hits fetched in full.
    pub fan_out_limit: usize,
    pub source: &'a dyn ReleaseSource,
}

/// Best release of one release group, scored against the local track count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Release-group id, or `release:<id>` for a release without a group.
    pub release_group_key: String,
    pub best_release: RemoteRelease,
    pub track_count_difference: usize,
    pub release_group: Option<RemoteReleaseGroup>,
}

/// Result of a matching pass. Both fields are `None` when nothing matched
/// or the user cancelled a tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub release: Option<RemoteRelease>,
    pub release_group: Option<RemoteReleaseGroup>,
}

impl MatchOutcome {
    pub fn not_found() -> Self {
        Self::default()
    }

    fn from_candidate(candidate: &MatchCandidate) -> Self {
        Self {
            release: Some(candidate.best_release.clone()),
            release_group: candidate.release_group.clone(),
        }
    }
}

fn group_key(release: &RemoteRelease) -> String {
    match &release.release_group {
        Some(group) => group.id.clone(),
        None => format!("release:{}", release.id),
    }
}

/// Search, then fetch every hit in full. Hits whose lookup fails are skipped.
pub fn fetch_candidates(ctx: &MatchingContext<'_>) -> Vec<RemoteRelease> {
    let hits = match ctx.source.search_releases(
        ctx.artist_query.as_deref(),
        &ctx.album_query,
        ctx.fan_out_limit,
    ) {
        Ok(hits) => hits,
        Err(e) => {
            warn!("release search failed: {e}");
            return Vec::new();
        }
    };
    debug!("search returned {} hit(s)", hits.len());

    hits.iter()
        .take(ctx.fan_out_limit)
        .filter_map(|hit| {
            debug!("fetching release {} ({:?})", hit.id, hit.title);
            match ctx.source.release_by_id(&hit.id) {
                Ok(release) => Some(release),
                Err(e) => {
                    warn!("skipping release {}: {e}", hit.id);
                    None
                }
            }
        })
        .collect()
}

/// Group `releases` by release group and keep each group's closest member.
///
/// Groups come out in the order their first member was encountered; within a
/// group the first release with the smallest track-count difference wins.
pub fn compute_candidates(
    releases: &[RemoteRelease],
    local_track_count: usize,
) -> Vec<MatchCandidate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut candidates: Vec<MatchCandidate> = Vec::new();

    for release in releases {
        let key = group_key(release);
        let difference = release.total_track_count().abs_diff(local_track_count);

        match index.get(&key) {
            Some(&i) => {
                let current = &mut candidates[i];
                if difference < current.track_count_difference {
                    current.best_release = release.clone();
                    current.track_count_difference = difference;
                }
            }
            None => {
                index.insert(key.clone(), candidates.len());
                candidates.push(MatchCandidate {
                    release_group_key: key,
                    best_release: release.clone(),
                    track_count_difference: difference,
                    release_group: release.release_group.clone(),
                });
            }
        }
    }

    candidates
}

/// Candidates sharing the smallest track-count difference, in input order.
pub fn tied_candidates(candidates: &[MatchCandidate]) -> Vec<&MatchCandidate> {
    let Some(best) = candidates.iter().map(|c| c.track_count_difference).min() else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter(|c| c.track_count_difference == best)
        .collect()
}

/// Ask the user to pick one of `tied`. Returns `None` on cancel.
///
/// Unparseable or out-of-range answers are rejected and asked again.
pub fn resolve_tie(
    tied: &[&MatchCandidate],
    disambiguator: &mut dyn Disambiguator,
) -> io::Result<Option<usize>> {
    let lines: Vec<String> = tied
        .iter()
        .enumerate()
        .map(|(i, c)| describe_candidate(i + 1, c))
        .collect();
    disambiguator.present(&lines)?;

    let prompt = format!("Enter a number 1..{} or cancel", tied.len());
    loop {
        let Some(answer) = disambiguator.ask(&prompt)? else {
            return Ok(None);
        };
        match parse_selection(&answer, tied.len()) {
            SelectionInput::Cancel => return Ok(None),
            SelectionInput::Index(i) => return Ok(Some(i)),
            SelectionInput::Invalid => {
                let reason = format!("please enter a number between 1 and {}", tied.len());
                disambiguator.reject(&answer, &reason)?;
            }
        }
    }
}

/// Pick the release whose total track count is closest to the local album.
///
/// A unique best release group is returned directly; a tie across groups is
/// handed to `disambiguator`. No results, failed lookups and a cancelled
/// tie-break all yield [`MatchOutcome::not_found`].
pub fn select_best_release(
    ctx: &MatchingContext<'_>,
    disambiguator: &mut dyn Disambiguator,
) -> io::Result<MatchOutcome> {
    let releases = fetch_candidates(ctx);
    if releases.is_empty() {
        return Ok(MatchOutcome::not_found());
    }

    let candidates = compute_candidates(&releases, ctx.local_track_count);
    for c in &candidates {
        debug!(
            "candidate {}: release {} differs by {} track(s)",
            c.release_group_key, c.best_release.id, c.track_count_difference
        );
    }
    let tied = tied_candidates(&candidates);

    match tied.as_slice() {
        [] => Ok(MatchOutcome::not_found()),
        [only] => {
            info!(
                "selected release {} (track count difference {})",
                only.best_release.id, only.track_count_difference
            );
            Ok(MatchOutcome::from_candidate(only))
        }
        _ => {
            info!(
                "{} release groups tie at track count difference {}",
                tied.len(),
                tied[0].track_count_difference
            );
            Ok(match resolve_tie(&tied, disambiguator)? {
                Some(i) => MatchOutcome::from_candidate(tied[i]),
                None => MatchOutcome::not_found(),
            })
        }
    }
}
