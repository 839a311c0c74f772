use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
pub struct HotelDocumentAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub code: Option<String>,
}

/// A hotel document as read with the `{address: 1, _id: 0}` projection.
#[derive(Serialize, Deserialize)]
pub struct HotelDocument {
    pub address: Option<HotelDocumentAddress>,
}
