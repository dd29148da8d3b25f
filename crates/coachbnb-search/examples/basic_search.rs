//! Offline search over a small in-memory candidate set, no network.
//!
//! Run with: `cargo run --example basic_search`

use chrono::{TimeZone, Utc};
use coachbnb_geocoding::ZippopotamClient;
use coachbnb_search::{
    Candidate, CoachSearcher, GeoPoint, Resolution, ResolvedLocation, SearchRequest, SessionMode,
};

fn seed_coaches() -> Vec<Candidate> {
    let coach = |id: &str, city: &str, lat: f64, lng: f64, price: u32, rating: f64| Candidate {
        id: id.to_string(),
        slug: id.to_string(),
        headline: format!("Coach in {city}"),
        city: city.to_string(),
        location: GeoPoint::new(lat, lng),
        specialties: vec!["Strength Training".into()],
        price_per_hour: price,
        session_mode: SessionMode::InPersonAndVirtual,
        rating_average: Some(rating),
        rating_count: 12,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    };

    vec![
        coach("amy", "Austin", 30.2672, -97.7431, 85, 4.9),
        coach("ben", "Round Rock", 30.5083, -97.6789, 65, 4.6),
        coach("cal", "Boston", 42.3601, -71.0589, 75, 4.8),
    ]
}

fn main() -> anyhow::Result<()> {
    coachbnb_search::init_logging(tracing::Level::INFO)?;

    let searcher = CoachSearcher::new(ZippopotamClient::new()?);

    // Pretend downtown Austin already resolved, 50 mile radius.
    let resolution = Resolution::Resolved(ResolvedLocation {
        point: GeoPoint::new(30.2672, -97.7431).ok_or_else(|| anyhow::anyhow!("bad center"))?,
        radius_miles: 50.0,
        display_text: Some("Austin, TX 78701".into()),
    });

    let request = SearchRequest {
        sort_by: Some("price-low".into()),
        ..Default::default()
    };
    let outcome = searcher.search_resolved(seed_coaches(), &request, &resolution);

    println!("{} coaches within 50 miles of Austin:", outcome.total);
    for result in &outcome.coaches {
        println!(
            "  {} (${}/hr, {:.1} mi)",
            result.coach.headline,
            result.coach.price_per_hour,
            result.distance_miles.unwrap_or_default()
        );
    }
    Ok(())
}
