use std::sync::Arc;

use crate::services::hotel_store::hotel_store::HotelStore;

#[derive(Clone)]
pub struct AppState {
    pub hotel_store: Arc<dyn HotelStore>,
}
