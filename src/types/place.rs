#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    pub city: &'static str,
    pub country: &'static str,
    pub code: &'static str,
}

/// Places offered when the hotel collection has nothing to suggest.
pub static PLACES: [Place; 3] = [
    Place {
        city: "Chennai",
        country: "IN",
        code: "553248633981715834",
    },
    Place {
        city: "Delhi",
        country: "IN",
        code: "180000",
    },
    Place {
        city: "Bengaluru",
        country: "IN",
        code: "553248633981715864",
    },
];

impl Place {
    /// `term` is expected to be lowercased already.
    pub fn matches(&self, term: &str) -> bool {
        self.city.to_lowercase().contains(term) || self.country.to_lowercase().contains(term)
    }
}

pub fn filter_places(term: &str) -> Vec<&'static Place> {
    PLACES.iter().filter(|p| p.matches(term)).collect()
}
