//! Catalogue summary figures.

use serde::Serialize;

use super::property::{Property, PropertyKind};

/// Counts over the available catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub for_sale: usize,
    pub for_rental: usize,
    pub luxury: usize,
    pub oceanfront: usize,
    pub featured: usize,
    /// Distinct non-empty neighbourhoods, in first-seen order.
    pub neighborhoods: Vec<String>,
}

impl CatalogStats {
    #[must_use]
    pub fn from_properties<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Self {
        let mut stats = Self::default();
        for property in properties {
            let d = &property.details;
            stats.total += 1;
            match property.kind() {
                PropertyKind::Sale => stats.for_sale += 1,
                PropertyKind::Rental => stats.for_rental += 1,
            }
            stats.luxury += usize::from(d.is_luxury);
            stats.oceanfront += usize::from(d.is_oceanfront);
            stats.featured += usize::from(d.is_featured);
            if let Some(n) = d.neighborhood.as_deref().map(str::trim) {
                if !n.is_empty() && !stats.neighborhoods.iter().any(|seen| seen == n) {
                    stats.neighborhoods.push(n.to_string());
                }
            }
        }
        stats
    }
}
