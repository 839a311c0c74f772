pub mod hotel_document;
pub mod hotel_filter;
pub mod hotel_store_error;
