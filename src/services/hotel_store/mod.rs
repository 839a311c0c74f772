pub mod hotel_store;
pub mod hotel_store_service;
#[cfg(test)]
pub mod mock_hotel_store;
pub mod types;
