pub mod hotel_store;
