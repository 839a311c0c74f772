use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use super::{
    hotel_store::{HotelAddressRecord, HotelStore},
    types::{
        hotel_document::HotelDocument, hotel_filter::HotelFilter,
        hotel_store_error::HotelStoreError,
    },
};

#[derive(Clone)]
pub struct HotelStoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

/// MongoDB backed hotel collection.
#[derive(Clone)]
pub struct HotelStoreService {
    hotels: Collection<HotelDocument>,
}

impl HotelStoreService {
    pub async fn connect(config: HotelStoreConfig) -> Result<Self, HotelStoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| HotelStoreError::Connect(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            hotels: client
                .database(&config.database)
                .collection::<HotelDocument>(&config.collection),
        })
    }
}

#[async_trait]
impl HotelStore for HotelStoreService {
    async fn find_addresses(
        &self,
        filter: HotelFilter,
        limit: u64,
    ) -> Result<Vec<HotelAddressRecord>, HotelStoreError> {
        let documents: Vec<HotelDocument> = self
            .hotels
            .find(filter.to_document())
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .projection(doc! { "address": 1, "_id": 0 })
            .await
            .map_err(|e| HotelStoreError::Query(format!("Failed to run find: {}", e)))?
            .try_collect()
            .await
            .map_err(|e| HotelStoreError::Query(format!("Failed to read cursor: {}", e)))?;

        Ok(documents.into_iter().map(to_address_record).collect())
    }
}

/// Missing city or country become empty strings rather than being dropped, so
/// incomplete documents still produce a `city-country` key and both fields in
/// the response.
fn to_address_record(document: HotelDocument) -> HotelAddressRecord {
    let address = document.address.unwrap_or_default();
    HotelAddressRecord {
        city: address.city.unwrap_or_default(),
        country: address.country.unwrap_or_default(),
        code: address.code,
    }
}
