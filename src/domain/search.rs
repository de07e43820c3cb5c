//! Property search criteria.
//!
//! [`RawSearchParams`] is the query as the client sent it, every value a
//! string. [`SearchCriteria::from_raw`] turns it into typed filters and
//! rejects anything it cannot parse instead of letting a bad number turn
//! into a filter that silently matches nothing.
//!
//! The store runs the column filters as SQL and applies
//! [`SearchCriteria::matches_text`] to the rows it loads, since SQLite
//! `LIKE` folds case for ASCII only. [`SearchCriteria::matches`] is the
//! whole predicate in memory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::Price;
use super::property::{Property, PropertyKind, PropertyStatus};

/// Search parameters exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luxury: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oceanfront: Option<String>,
}

/// Inclusive bounds on the listing price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<Price>,
    pub max: Option<Price>,
}

impl PriceRange {
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// A missing price never satisfies a bound.
    #[must_use]
    pub fn contains(&self, price: Option<Price>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(price) = price else {
            return false;
        };
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Validated search filters. Only available properties are ever returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Free text matched against title, description, location,
    /// neighborhood and address.
    pub query: Option<String>,
    pub kind: Option<PropertyKind>,
    /// Substring of location or neighborhood.
    pub location: Option<String>,
    pub price: PriceRange,
    pub min_bedrooms: Option<i32>,
    pub luxury_only: bool,
    pub oceanfront_only: bool,
}

impl SearchCriteria {
    /// Parse and validate raw parameters.
    ///
    /// Blank strings count as absent. `type=all` means any kind. The boolean
    /// filters switch on only for the literal `true`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFilter`] for a value that does not
    /// parse, a negative number, or a minimum price above the maximum.
    pub fn from_raw(raw: &RawSearchParams) -> Result<Self, DomainError> {
        let kind = match non_blank(&raw.kind) {
            None => None,
            Some(value) if value.eq_ignore_ascii_case("all") => None,
            Some(value) => Some(value.parse::<PropertyKind>().map_err(|_| {
                DomainError::InvalidFilter {
                    field: "type",
                    value: value.to_string(),
                    reason: "expected sale, rental or all",
                }
            })?),
        };

        let min = parse_price("minPrice", non_blank(&raw.min_price))?;
        let max = parse_price("maxPrice", non_blank(&raw.max_price))?;
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::InvalidFilter {
                    field: "minPrice",
                    value: lo.to_string(),
                    reason: "greater than maxPrice",
                });
            }
        }

        let min_bedrooms = match non_blank(&raw.bedrooms) {
            None => None,
            Some(value) => {
                let parsed: i32 = value.parse().map_err(|_| DomainError::InvalidFilter {
                    field: "bedrooms",
                    value: value.to_string(),
                    reason: "not a whole number",
                })?;
                if parsed < 0 {
                    return Err(DomainError::InvalidFilter {
                        field: "bedrooms",
                        value: value.to_string(),
                        reason: "must not be negative",
                    });
                }
                Some(parsed)
            }
        };

        Ok(Self {
            query: non_blank(&raw.q).map(str::to_string),
            kind,
            location: non_blank(&raw.location).map(str::to_string),
            price: PriceRange { min, max },
            min_bedrooms,
            luxury_only: is_true(&raw.luxury),
            oceanfront_only: is_true(&raw.oceanfront),
        })
    }

    /// In-memory evaluation of the criteria.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        let d = &property.details;

        if property.status != PropertyStatus::Available {
            return false;
        }
        if self.kind.is_some_and(|kind| kind != property.kind()) {
            return false;
        }
        if !self.price.contains(property.listing_price()) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|min| d.bedrooms < min) {
            return false;
        }
        if self.luxury_only && !d.is_luxury {
            return false;
        }
        if self.oceanfront_only && !d.is_oceanfront {
            return false;
        }
        self.matches_text(property)
    }

    /// The free-text and location filters alone, folding case over the
    /// full Unicode range (`GETSEMANÍ` finds `Getsemaní`).
    #[must_use]
    pub fn matches_text(&self, property: &Property) -> bool {
        let d = &property.details;

        if let Some(query) = &self.query {
            let fields = [
                Some(d.title.as_str()),
                d.description.as_deref(),
                Some(d.location.as_str()),
                d.neighborhood.as_deref(),
                d.address.as_deref(),
            ];
            if !fields.into_iter().flatten().any(|f| contains_ci(f, query)) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            let in_neighborhood = d
                .neighborhood
                .as_deref()
                .is_some_and(|n| contains_ci(n, location));
            if !contains_ci(&d.location, location) && !in_neighborhood {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn is_true(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim) == Some("true")
}

fn parse_price(field: &'static str, value: Option<&str>) -> Result<Option<Price>, DomainError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed: Decimal = value.parse().map_err(|_| DomainError::InvalidFilter {
        field,
        value: value.to_string(),
        reason: "not a number",
    })?;
    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(DomainError::InvalidFilter {
            field,
            value: value.to_string(),
            reason: "must not be negative",
        });
    }
    Ok(Some(parsed))
}

/// Case-insensitive substring test. Wildcard characters are literal.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::PropertyId;
    use crate::domain::property::{Listing, PropertyDetails};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn raw() -> RawSearchParams {
        RawSearchParams::default()
    }

    fn property(id: i32, listing: Listing) -> Property {
        let mut details = PropertyDetails::new(format!("Listing {id}"), "Bocagrande, Cartagena", listing);
        details.neighborhood = Some("Bocagrande".into());
        details.bedrooms = 3;
        Property {
            id: PropertyId::new(id),
            details,
            status: PropertyStatus::Available,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, id as u32).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sale(id: i32, price: Price) -> Property {
        property(id, Listing::Sale { price: Some(price) })
    }

    fn rental(id: i32, nightly: Price) -> Property {
        property(
            id,
            Listing::Rental {
                price_per_night: Some(nightly),
            },
        )
    }

    #[test]
    fn empty_params_match_every_available_property() {
        let criteria = SearchCriteria::from_raw(&raw()).unwrap();
        assert_eq!(criteria, SearchCriteria::default());
        assert!(criteria.matches(&sale(1, dec!(10))));

        let mut sold = sale(2, dec!(10));
        sold.status = PropertyStatus::Sold;
        assert!(!criteria.matches(&sold));
    }

    #[test]
    fn type_all_is_no_filter() {
        let criteria = SearchCriteria::from_raw(&RawSearchParams {
            kind: Some("all".into()),
            ..raw()
        })
        .unwrap();
        assert_eq!(criteria.kind, None);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = SearchCriteria::from_raw(&RawSearchParams {
            kind: Some("lease".into()),
            ..raw()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn malformed_numbers_are_rejected_not_coerced() {
        for (params, field) in [
            (
                RawSearchParams {
                    min_price: Some("abc".into()),
                    ..raw()
                },
                "minPrice",
            ),
            (
                RawSearchParams {
                    max_price: Some("1e".into()),
                    ..raw()
                },
                "maxPrice",
            ),
            (
                RawSearchParams {
                    bedrooms: Some("two".into()),
                    ..raw()
                },
                "bedrooms",
            ),
            (
                RawSearchParams {
                    bedrooms: Some("-1".into()),
                    ..raw()
                },
                "bedrooms",
            ),
        ] {
            let err = SearchCriteria::from_raw(&params).unwrap_err();
            assert_eq!(err.field(), Some(field), "params: {params:?}");
        }
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let err = SearchCriteria::from_raw(&RawSearchParams {
            min_price: Some("500".into()),
            max_price: Some("100".into()),
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidFilter { field: "minPrice", .. }));
    }

    #[test]
    fn boolean_filters_only_switch_on_for_literal_true() {
        for (value, expected) in [("true", true), ("false", false), ("1", false), ("yes", false)] {
            let criteria = SearchCriteria::from_raw(&RawSearchParams {
                luxury: Some(value.into()),
                oceanfront: Some(value.into()),
                ..raw()
            })
            .unwrap();
            assert_eq!(criteria.luxury_only, expected, "luxury={value}");
            assert_eq!(criteria.oceanfront_only, expected, "oceanfront={value}");
        }
    }

    #[test]
    fn price_bounds_use_nightly_rate_for_rentals() {
        let criteria = SearchCriteria::from_raw(&RawSearchParams {
            min_price: Some("300000".into()),
            max_price: Some("500000".into()),
            ..raw()
        })
        .unwrap();

        assert!(criteria.matches(&rental(1, dec!(450000))));
        assert!(!criteria.matches(&sale(2, dec!(1200000000))));
        assert!(criteria.matches(&sale(3, dec!(300000))), "bounds are inclusive");
    }

    #[test]
    fn missing_listing_price_fails_any_price_bound() {
        let criteria = SearchCriteria::from_raw(&RawSearchParams {
            max_price: Some("10".into()),
            ..raw()
        })
        .unwrap();
        assert!(!criteria.matches(&property(1, Listing::Sale { price: None })));
        assert!(SearchCriteria::default().matches(&property(1, Listing::Sale { price: None })));
    }

    #[test]
    fn query_matches_any_text_column_case_insensitively() {
        let mut p = sale(1, dec!(1));
        p.details.address = Some("Calle del Arsenal #25-18".into());
        let criteria = SearchCriteria {
            query: Some("ARSENAL".into()),
            ..Default::default()
        };
        assert!(criteria.matches(&p));

        let criteria = SearchCriteria {
            query: Some("Getsemaní".into()),
            ..Default::default()
        };
        assert!(!criteria.matches(&p));
    }

    #[test]
    fn location_matches_location_or_neighborhood() {
        let mut p = sale(1, dec!(1));
        p.details.location = "Cartagena".into();
        p.details.neighborhood = Some("Manga".into());
        let by_neighborhood = SearchCriteria {
            location: Some("manga".into()),
            ..Default::default()
        };
        assert!(by_neighborhood.matches(&p));

        p.details.neighborhood = None;
        assert!(!by_neighborhood.matches(&p));
    }

    #[test]
    fn bedrooms_is_a_minimum() {
        let criteria = SearchCriteria {
            min_bedrooms: Some(3),
            ..Default::default()
        };
        assert!(criteria.matches(&sale(1, dec!(1))));
        let mut small = sale(2, dec!(1));
        small.details.bedrooms = 2;
        assert!(!criteria.matches(&small));
    }

    #[test]
    fn text_filters_fold_accented_capitals() {
        let criteria = SearchCriteria::from_raw(&RawSearchParams {
            location: Some("GETSEMANÍ".into()),
            ..raw()
        })
        .unwrap();
        let mut casa = rental(1, dec!(380000));
        casa.details.neighborhood = Some("Getsemaní".into());
        assert!(criteria.matches_text(&casa));
        assert!(criteria.matches(&casa));

        casa.details.neighborhood = Some("Manga".into());
        assert!(!criteria.matches_text(&casa));
    }

    #[test]
    fn text_query_treats_wildcards_literally() {
        let criteria = SearchCriteria::from_raw(&RawSearchParams {
            q: Some("50%".into()),
            ..raw()
        })
        .unwrap();
        let mut villa = sale(1, dec!(1));
        villa.details.title = "Villa 500".into();
        assert!(!criteria.matches_text(&villa));
        villa.details.title = "Villa 50% off".into();
        assert!(criteria.matches_text(&villa));
    }
}
