#[derive(Debug)]
pub enum HotelStoreError {
    Connect(String),
    Query(String),
}

impl std::fmt::Display for HotelStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HotelStoreError::Connect(e) => write!(f, "Connect error: {}", e),
            HotelStoreError::Query(e) => write!(f, "Query error: {}", e),
        }
    }
}
