//! Geocoding collaborators for the CoachBnB coach search core.
//!
//! The search core never talks to a geocoding service directly; it goes through
//! the [`GeocodingProvider`] trait defined here. This crate ships the production
//! implementation ([`ZippopotamClient`], backed by the free Zippopotam.us API),
//! a [`FallbackProvider`] that chains a secondary provider behind a primary, and
//! the US state-code normalization the free-text location box relies on.
//!
//! A lookup has three distinct outcomes, and callers depend on the distinction:
//!
//! - `Ok(Some(place))` / `Ok(non-empty)` — the code or city resolved.
//! - `Ok(None)` / `Ok(empty)` — the service answered and confirmed there is no
//!   such place. This is final; fallback providers must not retry it.
//! - `Err(_)` — transient failure (network, timeout, bad payload). Callers
//!   degrade to a location-agnostic search, and fallback providers may retry
//!   against their secondary.

mod fallback;
mod provider;
mod states;
mod zippopotam;

pub use fallback::FallbackProvider;
pub use provider::{GeocodingProvider, PlaceLookup};
pub use states::normalize_state_code;
pub use zippopotam::ZippopotamClient;

/// Maximum number of candidates returned by a city/state lookup.
pub const MAX_PLACE_CANDIDATES: usize = 5;

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum GeocodingError {
        #[error("HTTP error: {0}")]
        Http(#[from] reqwest::Error),
        #[error("Unexpected response from geocoding service: {0}")]
        InvalidResponse(String),
    }

    pub type Result<T> = std::result::Result<T, GeocodingError>;
}

pub use error::{GeocodingError, Result};
