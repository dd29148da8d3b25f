//! The ranking pipeline: radius filter, attribute filters, sort, page.
//!
//! Stages run in a fixed order, and `total` is counted after filtering
//! but before pagination so the caller can render page controls.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{
    geo::filter_by_radius,
    model::{Candidate, RankedResult, SearchOutcome},
    query::{Page, SearchFilters, SortKey},
    resolve::Resolution,
};

/// Execute the full pipeline over an owned candidate set.
#[instrument(skip(candidates, filters, resolution), fields(candidates = candidates.len()))]
pub fn run_search(
    candidates: Vec<Candidate>,
    filters: &SearchFilters,
    resolution: &Resolution,
    sort: SortKey,
    page: Page,
) -> SearchOutcome {
    let mut results = match resolution.location() {
        Some(location) => filter_by_radius(candidates, location.point, location.radius_miles),
        None => candidates.into_iter().map(RankedResult::unranked).collect(),
    };

    results.retain(|result| filters.matches(&result.coach));
    let total = results.len();

    let sort = effective_sort(sort, resolution);
    results.sort_by(|a, b| compare(a, b, sort));

    let coaches: Vec<_> = results
        .into_iter()
        .skip(page.offset())
        .take(page.limit())
        .collect();

    debug!(total, page_len = coaches.len(), ?sort, "search complete");
    SearchOutcome { coaches, total }
}

/// Distance ordering needs a search center; without one it silently
/// falls back to the recommended ordering.
fn effective_sort(sort: SortKey, resolution: &Resolution) -> SortKey {
    if sort == SortKey::DistanceAsc && !resolution.is_resolved() {
        SortKey::Recommended
    } else {
        sort
    }
}

fn compare(a: &RankedResult, b: &RankedResult, sort: SortKey) -> Ordering {
    let ordering = match sort {
        SortKey::Recommended => b
            .coach
            .rating_or_zero()
            .total_cmp(&a.coach.rating_or_zero())
            .then_with(|| b.coach.rating_count.cmp(&a.coach.rating_count)),
        SortKey::PriceAsc => a.coach.price_per_hour.cmp(&b.coach.price_per_hour),
        SortKey::PriceDesc => b.coach.price_per_hour.cmp(&a.coach.price_per_hour),
        SortKey::RatingDesc => b
            .coach
            .rating_or_zero()
            .total_cmp(&a.coach.rating_or_zero()),
        SortKey::Newest => b.coach.created_at.cmp(&a.coach.created_at),
        SortKey::DistanceAsc => a
            .distance_miles
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance_miles.unwrap_or(f64::INFINITY)),
    };
    // Deterministic order for equal keys, so pages never overlap or skip.
    ordering.then_with(|| a.coach.id.cmp(&b.coach.id))
}
