use mongodb::bson::{doc, Document};

const REGEX_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Filter applied to the hotel collection when looking up addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelFilter {
    All,
    /// Holds an already escaped pattern, matched against the lowercased
    /// `address.city` or `address.country`.
    CityOrCountryMatches(String),
}

impl HotelFilter {
    /// Substring match of a literal (lowercased) term on city or country.
    pub fn city_or_country_contains(term: &str) -> Self {
        HotelFilter::CityOrCountryMatches(escape_regex(term))
    }

    pub fn to_document(&self) -> Document {
        match self {
            HotelFilter::All => doc! {},
            HotelFilter::CityOrCountryMatches(pattern) => doc! {
                "$or": [
                    lowercase_regex_match("$address.city", pattern),
                    lowercase_regex_match("$address.country", pattern),
                ]
            },
        }
    }
}

fn lowercase_regex_match(field: &str, pattern: &str) -> Document {
    doc! {
        "$expr": {
            "$regexMatch": {
                "input": { "$toLower": field },
                "regex": pattern,
            }
        }
    }
}

pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_metacharacter() {
        assert_eq!(
            escape_regex(r".*+?^${}()|[]\"),
            r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_regex("new delhi"), "new delhi");
        assert_eq!(escape_regex("são paulo-1"), "são paulo-1");
    }

    #[test]
    fn treats_pattern_input_as_literal() {
        assert_eq!(
            HotelFilter::city_or_country_contains("a.b*c"),
            HotelFilter::CityOrCountryMatches(r"a\.b\*c".to_string())
        );
    }

    #[test]
    fn all_is_an_empty_document() {
        assert_eq!(HotelFilter::All.to_document(), doc! {});
    }

    #[test]
    fn matches_lowercased_city_or_country() {
        let document = HotelFilter::city_or_country_contains("del").to_document();

        assert_eq!(
            document,
            doc! {
                "$or": [
                    {
                        "$expr": {
                            "$regexMatch": {
                                "input": { "$toLower": "$address.city" },
                                "regex": "del",
                            }
                        }
                    },
                    {
                        "$expr": {
                            "$regexMatch": {
                                "input": { "$toLower": "$address.country" },
                                "regex": "del",
                            }
                        }
                    },
                ]
            }
        );
    }
}
