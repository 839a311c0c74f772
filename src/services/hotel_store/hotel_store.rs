use async_trait::async_trait;

use super::types::{hotel_filter::HotelFilter, hotel_store_error::HotelStoreError};

/// The `address` projection of a hotel document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelAddressRecord {
    pub city: String,
    pub country: String,
    pub code: Option<String>,
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Returns at most `limit` hotel addresses matching `filter`.
    async fn find_addresses(
        &self,
        filter: HotelFilter,
        limit: u64,
    ) -> Result<Vec<HotelAddressRecord>, HotelStoreError>;
}
