//! Scorer/ranker: filter the catalog by budget and OS, score each survivor
//! against the requested intent profile, return the top matches.

use std::cmp::Ordering;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::IntentProfiles;
use crate::model::{Query, QueryError, Recommendation, ScoredPhone};

pub struct Recommender {
    profiles: IntentProfiles,
    limit: usize,
}

impl Recommender {
    pub fn new(profiles: IntentProfiles, limit: usize) -> Self {
        Self { profiles, limit }
    }

    /// Runs one query against the shared catalog. Produces a fresh derived
    /// list; the catalog itself is never written.
    ///
    /// The intent key is resolved before anything else so a caller bug is
    /// never masked by an empty filter result. The OS filter is a
    /// case-insensitive substring match, deliberately tolerant of label
    /// drift ("androidtv" still matches "android").
    pub fn recommend(
        &self,
        catalog: &Catalog,
        query: &Query,
    ) -> Result<Recommendation, QueryError> {
        let profile = self.profiles.resolve(&query.intent)?;
        let budget = f64::from(query.budget);
        let os_needle = query.os_family.to_lowercase();

        let affordable: Vec<_> = catalog
            .records
            .iter()
            .filter(|r| r.clean.price <= budget && r.clean.version.contains(&os_needle))
            .collect();

        if affordable.is_empty() {
            info!(budget = query.budget, os = %query.os_family, "no catalog match");
            return Ok(Recommendation::NoMatch {
                budget: query.budget,
                os_family: query.os_family.clone(),
            });
        }

        let mut scored: Vec<ScoredPhone> = affordable
            .into_iter()
            .map(|record| ScoredPhone {
                score: profile.weights.score(&record.normalized),
                record: record.clone(),
            })
            .collect();

        // Stable sort: ties keep catalog order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.limit);

        info!(
            intent = %query.intent,
            budget = query.budget,
            results = scored.len(),
            "query ranked"
        );
        Ok(Recommendation::Ranked(scored))
    }
}
