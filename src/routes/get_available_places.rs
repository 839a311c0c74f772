use std::collections::HashMap;

use crate::{
    services::hotel_store::{
        hotel_store::HotelAddressRecord,
        types::{hotel_filter::HotelFilter, hotel_store_error::HotelStoreError},
    },
    types::{
        app_state::AppState,
        place::{filter_places, Place, PLACES},
    },
    utils::{app_error::AppError, query_params::QueryParams},
};
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

pub const DEFAULT_LIMIT: u64 = 10;

const SUCCESS_MESSAGE: &str = "Available places fetched successfully";
const FAILURE_MESSAGE: &str = "Error getting available places";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GetAvailablePlacesPayload {
    pub limit: Option<String>,
    pub search_query: Option<String>,
}

impl GetAvailablePlacesPayload {
    /// A repeated parameter takes its last value; unknown parameters are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut payload = GetAvailablePlacesPayload::default();
        for (key, value) in pairs {
            match key.as_str() {
                "limit" => payload.limit = Some(value),
                "searchQuery" => payload.search_query = Some(value),
                _ => {}
            }
        }
        payload
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GetAvailablePlacesResponsePlaceKind {
    Place,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetAvailablePlacesResponsePlace {
    pub city: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: GetAvailablePlacesResponsePlaceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetAvailablePlacesResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<GetAvailablePlacesResponsePlace>,
}

impl From<&Place> for GetAvailablePlacesResponsePlace {
    fn from(place: &Place) -> Self {
        GetAvailablePlacesResponsePlace {
            city: place.city.to_string(),
            country: place.country.to_string(),
            kind: GetAvailablePlacesResponsePlaceKind::Place,
            code: Some(place.code.to_string()),
        }
    }
}

impl From<HotelAddressRecord> for GetAvailablePlacesResponsePlace {
    fn from(record: HotelAddressRecord) -> Self {
        GetAvailablePlacesResponsePlace {
            city: record.city,
            country: record.country,
            kind: GetAvailablePlacesResponsePlaceKind::Place,
            code: record.code,
        }
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_available_places(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    info!(%uri, %method, "Available places API called");

    let payload = GetAvailablePlacesPayload::from_pairs(pairs);
    let limit = parse_limit(payload.limit.as_deref());
    let search_query = payload
        .search_query
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let data = if search_query.is_empty() {
        list_places(&state, limit).await
    } else {
        search_places(&state, &search_query, limit).await
    }
    .map_err(|e| {
        error!("Available places API error: {}", e);
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE)
    })?;

    Ok((
        StatusCode::OK,
        Json(GetAvailablePlacesResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }),
    )
        .into_response())
}

async fn list_places(
    state: &AppState,
    limit: u64,
) -> Result<Vec<GetAvailablePlacesResponsePlace>, HotelStoreError> {
    let hotels = state
        .hotel_store
        .find_addresses(HotelFilter::All, limit)
        .await?;

    if hotels.is_empty() {
        return Ok(PLACES.iter().map(GetAvailablePlacesResponsePlace::from).collect());
    }

    Ok(hotels
        .into_iter()
        .map(GetAvailablePlacesResponsePlace::from)
        .collect())
}

async fn search_places(
    state: &AppState,
    search_query: &str,
    limit: u64,
) -> Result<Vec<GetAvailablePlacesResponsePlace>, HotelStoreError> {
    let hotel_results = state
        .hotel_store
        .find_addresses(HotelFilter::city_or_country_contains(search_query), limit)
        .await?
        .into_iter()
        .map(|h| GetAvailablePlacesResponsePlace {
            code: None,
            ..GetAvailablePlacesResponsePlace::from(h)
        });

    let place_results = filter_places(search_query)
        .into_iter()
        .map(GetAvailablePlacesResponsePlace::from);

    Ok(dedup_by_city_country(hotel_results.chain(place_results)))
}

/// Later entries replace earlier ones sharing a `city-country` key but keep
/// the earlier entry's position.
fn dedup_by_city_country(
    places: impl IntoIterator<Item = GetAvailablePlacesResponsePlace>,
) -> Vec<GetAvailablePlacesResponsePlace> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<GetAvailablePlacesResponsePlace> = Vec::new();

    for place in places {
        let key = format!("{}-{}", place.city, place.country);
        match slots.get(&key) {
            Some(&slot) => deduped[slot] = place,
            None => {
                slots.insert(key, deduped.len());
                deduped.push(place);
            }
        }
    }

    deduped
}

/// Anything that isn't a finite number of at least one falls back to the default.
fn parse_limit(limit: Option<&str>) -> u64 {
    limit
        .and_then(parse_number)
        .filter(|l| l.is_finite() && *l >= 1.0)
        .map(|l| l.trunc() as u64)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Decimal or exponent notation, plus unsigned `0x`, `0o` and `0b` integers.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let radix = match raw.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return raw.parse::<f64>().ok(),
    };

    let digits = &raw[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}
