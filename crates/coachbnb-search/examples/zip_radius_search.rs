//! Live ZIP-code search against the Zippopotam.us API.
//!
//! Run with: `cargo run --example zip_radius_search -- 78701`

use chrono::{TimeZone, Utc};
use coachbnb_geocoding::ZippopotamClient;
use coachbnb_search::{
    Candidate, CoachSearcher, GeoPoint, SearchConfig, SearchRequest, SessionMode,
};

fn seed_coaches() -> Vec<Candidate> {
    let coach = |id: &str, city: &str, lat: f64, lng: f64, price: u32| Candidate {
        id: id.to_string(),
        slug: id.to_string(),
        headline: format!("Coach in {city}"),
        city: city.to_string(),
        location: GeoPoint::new(lat, lng),
        specialties: vec!["Running".into()],
        price_per_hour: price,
        session_mode: SessionMode::InPersonAndVirtual,
        rating_average: Some(4.7),
        rating_count: 20,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
    };

    vec![
        coach("amy", "Austin", 30.2672, -97.7431, 85),
        coach("ben", "San Marcos", 29.8833, -97.9414, 60),
        coach("cal", "Dallas", 32.7767, -96.7970, 95),
        coach("dee", "Seattle", 47.6062, -122.3321, 110),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    coachbnb_search::init_logging(tracing::Level::INFO)?;

    let zip = std::env::args().nth(1).unwrap_or_else(|| "78701".into());

    let config = SearchConfig::builder().default_radius(50.0).build();
    let searcher = CoachSearcher::with_config(ZippopotamClient::new()?, config);

    let request = SearchRequest {
        zip_code: Some(zip.clone()),
        sort_by: Some("distance".into()),
        ..Default::default()
    };
    let outcome = searcher.search(seed_coaches(), &request).await;

    println!("{} coaches near {zip}:", outcome.total);
    for result in &outcome.coaches {
        match result.distance_miles {
            Some(miles) => println!("  {} - {miles:.1} mi", result.coach.headline),
            None => println!("  {}", result.coach.headline),
        }
    }
    Ok(())
}
