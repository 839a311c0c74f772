use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    hotel_store::{HotelAddressRecord, HotelStore},
    types::{hotel_filter::HotelFilter, hotel_store_error::HotelStoreError},
};

/// In-memory store for route tests. Returns its canned records as-is (at most
/// `limit` of them) and remembers every call.
#[derive(Default)]
pub struct MockHotelStore {
    records: Vec<HotelAddressRecord>,
    fail: bool,
    calls: Mutex<Vec<(HotelFilter, u64)>>,
}

impl MockHotelStore {
    pub fn with_addresses(addresses: &[(&str, &str, &str)]) -> Self {
        MockHotelStore {
            records: addresses
                .iter()
                .map(|(city, country, code)| HotelAddressRecord {
                    city: city.to_string(),
                    country: country.to_string(),
                    code: Some(code.to_string()),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        MockHotelStore {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(HotelFilter, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HotelStore for MockHotelStore {
    async fn find_addresses(
        &self,
        filter: HotelFilter,
        limit: u64,
    ) -> Result<Vec<HotelAddressRecord>, HotelStoreError> {
        self.calls.lock().unwrap().push((filter, limit));

        if self.fail {
            return Err(HotelStoreError::Query("connection reset".to_string()));
        }

        Ok(self
            .records
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
