//! Catalogue orchestration.
//!
//! [`CatalogService`] sits between the inbound adapters and the store: it
//! validates requests with the domain rules, prices stays, and logs every
//! write. Both the HTTP API and the CLI go through it.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::app::config::Config;
use crate::app::seed;
use crate::domain::error::DomainError;
use crate::domain::{
    AvailabilityConfig, Booking, BookingDraft, CalendarDay, CatalogStats, Inquiry, NewInquiry,
    PricingConfig, Property, PropertyId, PropertyKind, PropertyStatus, RawSearchParams,
    SearchCriteria, StayQuote, StayRequest, TourDay, TourSchedule,
};
use crate::error::{Error, Result};
use crate::port::CatalogStore;

/// Longest calendar a single request may ask for.
pub const MAX_CALENDAR_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, Default)]
enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

/// Application service over a [`CatalogStore`].
pub struct CatalogService<S> {
    store: S,
    pricing: PricingConfig,
    availability: AvailabilityConfig,
    tours: TourSchedule,
    clock: Clock,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Build the service from the pricing, availability and tour sections
    /// of `config`.
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            pricing: config.pricing.clone(),
            availability: config.availability.clone(),
            tours: TourSchedule::new(&config.tours),
            clock: Clock::System,
        }
    }

    /// Pin "today" to a fixed date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.clock = Clock::Fixed(today);
        self
    }

    /// The current date in UTC, or the pinned date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self.clock {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(date) => date,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Properties with `status`, optionally of one kind, in listing order.
    pub async fn list_properties(
        &self,
        kind: Option<PropertyKind>,
        status: PropertyStatus,
    ) -> Result<Vec<Property>> {
        self.store.list_properties(kind, status).await
    }

    /// Validate raw search parameters and run the search.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFilter`] for malformed parameters.
    pub async fn search(&self, raw: &RawSearchParams) -> Result<Vec<Property>> {
        let criteria = SearchCriteria::from_raw(raw)?;
        let results = self.store.search_properties(&criteria).await?;
        debug!(?criteria, count = results.len(), "Property search");
        Ok(results)
    }

    /// Fetch a property.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when no property has `id`.
    pub async fn property(&self, id: PropertyId) -> Result<Property> {
        self.store
            .get_property(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "property",
                id: id.get(),
            })
    }

    async fn rental(&self, id: PropertyId) -> Result<Property> {
        let property = self.property(id).await?;
        if property.kind() != PropertyKind::Rental {
            return Err(DomainError::NotBookable.into());
        }
        Ok(property)
    }

    /// Availability and nightly prices for a rental.
    ///
    /// `from` defaults to today and `days` to the booking window.
    ///
    /// # Errors
    /// [`Error::NotFound`] for a missing property, [`DomainError::NotBookable`]
    /// for a sale, [`DomainError::InvalidField`] for a day count outside
    /// `1..=366`.
    pub async fn availability(
        &self,
        id: PropertyId,
        from: Option<NaiveDate>,
        days: Option<u32>,
    ) -> Result<Vec<CalendarDay>> {
        let days = days.unwrap_or(self.availability.window_days);
        if days == 0 || days > MAX_CALENDAR_DAYS {
            return Err(DomainError::InvalidField {
                field: "days",
                reason: format!("must be between 1 and {MAX_CALENDAR_DAYS}, got {days}"),
            }
            .into());
        }
        let property = self.rental(id).await?;
        let today = self.today();
        Ok(self.availability.calendar(
            &property,
            &self.pricing,
            from.unwrap_or(today),
            days,
            today,
        ))
    }

    /// Validate and price a stay.
    ///
    /// # Errors
    /// [`Error::NotFound`] for a missing property, otherwise the first
    /// violated stay rule.
    pub async fn quote(&self, id: PropertyId, stay: StayRequest) -> Result<StayQuote> {
        let property = self.property(id).await?;
        let quote = stay.quote(&property, &self.pricing, &self.availability, self.today())?;
        Ok(quote)
    }

    /// Weekday tour slots from today. Any property can be toured.
    ///
    /// # Errors
    /// [`Error::NotFound`] for a missing property.
    pub async fn tours(&self, id: PropertyId) -> Result<Vec<TourDay>> {
        self.property(id).await?;
        Ok(self.tours.days(self.today()))
    }

    /// Bookings for a property, newest first.
    ///
    /// # Errors
    /// [`Error::NotFound`] for a missing property.
    pub async fn bookings(&self, id: PropertyId) -> Result<Vec<Booking>> {
        self.property(id).await?;
        self.store.bookings_for_property(id).await
    }

    /// Inquiries for a property, newest first.
    ///
    /// # Errors
    /// [`Error::NotFound`] for a missing property.
    pub async fn inquiries(&self, id: PropertyId) -> Result<Vec<Inquiry>> {
        self.property(id).await?;
        self.store.inquiries_for_property(id).await
    }

    /// Validate, price and store a booking request.
    ///
    /// Returns the stored booking with the property it is for.
    ///
    /// # Errors
    /// [`DomainError::NotBookable`] when the property is missing or not a
    /// rental, otherwise the first invalid field or stay rule.
    pub async fn create_booking(&self, draft: BookingDraft) -> Result<(Booking, Property)> {
        draft.validate()?;

        let property = match self.store.get_property(draft.property_id).await? {
            Some(p) if p.kind() == PropertyKind::Rental => p,
            _ => {
                warn!(property_id = %draft.property_id, "Booking rejected: property not bookable");
                return Err(DomainError::NotBookable.into());
            }
        };

        let quote = draft
            .stay
            .quote(&property, &self.pricing, &self.availability, self.today())
            .map_err(|e| {
                warn!(property_id = %property.id, error = %e, "Booking rejected");
                e
            })?;

        let booking = self
            .store
            .insert_booking(draft.into_new_booking(quote.total))
            .await?;

        info!(
            booking_id = %booking.id,
            property_id = %property.id,
            nights = quote.nights,
            total = %booking.total_price,
            "Booking created"
        );
        Ok((booking, property))
    }

    /// Validate and store an inquiry.
    ///
    /// # Errors
    /// [`DomainError::UnknownProperty`] when the property does not exist,
    /// otherwise the first invalid field or an unavailable tour slot.
    pub async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<(Inquiry, Property)> {
        inquiry.validate(&self.tours, self.today())?;

        let Some(property) = self.store.get_property(inquiry.property_id).await? else {
            warn!(property_id = %inquiry.property_id, "Inquiry rejected: unknown property");
            return Err(DomainError::UnknownProperty {
                id: inquiry.property_id.get(),
            }
            .into());
        };

        let inquiry = self.store.insert_inquiry(inquiry).await?;
        info!(
            inquiry_id = %inquiry.id,
            property_id = %property.id,
            kind = %inquiry.kind,
            "Inquiry created"
        );
        Ok((inquiry, property))
    }

    /// Summary counts over the available catalogue.
    pub async fn stats(&self) -> Result<CatalogStats> {
        let properties = self
            .store
            .list_properties(None, PropertyStatus::Available)
            .await?;
        Ok(CatalogStats::from_properties(&properties))
    }

    /// Insert the built-in catalogue.
    pub async fn seed(&self) -> Result<Vec<Property>> {
        let mut created = Vec::new();
        for property in seed::catalog() {
            let property = self.store.insert_property(property).await?;
            info!(property_id = %property.id, title = %property.details.title, "Seeded property");
            created.push(property);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open;
    use crate::adapter::outbound::sqlite::store::SqliteStore;
    use crate::domain::{Contact, InquiryKind, TourRequest};
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.availability.availability_rate = 1.0;
        config
    }

    /// 2026-03-02 is a Monday.
    async fn seeded_service() -> CatalogService<SqliteStore> {
        let store = SqliteStore::new(open(":memory:").unwrap());
        let service = CatalogService::new(store, &config()).with_today(date(2026, 3, 2));
        service.seed().await.unwrap();
        service
    }

    async fn id_of(service: &CatalogService<SqliteStore>, title: &str) -> PropertyId {
        service
            .list_properties(None, PropertyStatus::Available)
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.details.title == title)
            .map(|p| p.id)
            .unwrap()
    }

    fn guest() -> Contact {
        Contact {
            name: "Ana Torres".into(),
            email: "ana@example.com".into(),
            phone: None,
        }
    }

    fn draft(property_id: PropertyId, check_in: NaiveDate, check_out: NaiveDate) -> BookingDraft {
        BookingDraft {
            property_id,
            guest: guest(),
            stay: StayRequest {
                check_in,
                check_out,
                guests: 2,
            },
            total_price: None,
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn seed_populates_featured_first() {
        let service = seeded_service().await;
        let all = service
            .list_properties(None, PropertyStatus::Available)
            .await
            .unwrap();
        assert_eq!(all.len(), 6);
        assert!(all[..3].iter().all(|p| p.details.is_featured));
        assert!(all[3..].iter().all(|p| !p.details.is_featured));
    }

    #[tokio::test]
    async fn stats_count_the_seed_catalogue() {
        let service = seeded_service().await;
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.for_sale, 3);
        assert_eq!(stats.for_rental, 3);
        assert_eq!(stats.luxury, 3);
        assert_eq!(stats.oceanfront, 2);
        assert_eq!(stats.featured, 3);
        assert_eq!(stats.neighborhoods.len(), 5);
    }

    #[tokio::test]
    async fn search_rejects_malformed_filter() {
        let service = seeded_service().await;
        let err = service
            .search(&RawSearchParams {
                bedrooms: Some("many".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidFilter { .. })));
    }

    #[tokio::test]
    async fn missing_property_is_not_found() {
        let service = seeded_service().await;
        let err = service.property(PropertyId::new(404)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 404, .. }));
    }

    #[tokio::test]
    async fn quote_prices_weekday_nights() {
        let service = seeded_service().await;
        let id = id_of(&service, "Casa Colonial Getsemaní").await;

        // Mon 2nd .. Wed 4th: two weekday nights at 380 000.
        let quote = service
            .quote(
                id,
                StayRequest {
                    check_in: date(2026, 3, 2),
                    check_out: date(2026, 3, 4),
                    guests: 2,
                },
            )
            .await
            .unwrap();
        assert_eq!(quote.subtotal, dec!(760000));
        assert_eq!(quote.service_fee, dec!(76000));
        assert_eq!(quote.total, dec!(836050));
    }

    #[tokio::test]
    async fn availability_is_only_for_rentals() {
        let service = seeded_service().await;
        let villa = id_of(&service, "Villa de Lujo Frente al Mar").await;
        let err = service.availability(villa, None, None).await.unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::NotBookable)));

        let loft = id_of(&service, "Loft Artístico La Matuna").await;
        let days = service.availability(loft, None, Some(7)).await.unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2026, 3, 2));
        assert!(days.iter().all(|d| d.available));

        let err = service.availability(loft, None, Some(0)).await.unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidField { field: "days", .. })));
    }

    #[tokio::test]
    async fn booking_stores_quote_total_when_price_omitted() {
        let service = seeded_service().await;
        let id = id_of(&service, "Casa Colonial Getsemaní").await;

        let (booking, property) = service
            .create_booking(draft(id, date(2026, 3, 2), date(2026, 3, 4)))
            .await
            .unwrap();
        assert_eq!(property.id, id);
        assert_eq!(booking.total_price, dec!(836050));

        let listed = service.bookings(id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn booking_a_sale_is_rejected() {
        let service = seeded_service().await;
        let villa = id_of(&service, "Villa de Lujo Frente al Mar").await;
        let err = service
            .create_booking(draft(villa, date(2026, 3, 2), date(2026, 3, 4)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::NotBookable)));

        let err = service
            .create_booking(draft(PropertyId::new(99), date(2026, 3, 2), date(2026, 3, 4)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::NotBookable)));
    }

    #[tokio::test]
    async fn booking_below_minimum_stay_is_rejected() {
        let service = seeded_service().await;
        let id = id_of(&service, "Apartamento Ejecutivo Centro Histórico").await;
        let err = service
            .create_booking(draft(id, date(2026, 3, 2), date(2026, 3, 4)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::StayTooShort { nights: 2, min_stay: 3 })
        ));
        assert!(service.bookings(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn viewing_inquiry_books_tour_slot() {
        let service = seeded_service().await;
        let id = id_of(&service, "Penthouse Moderno Bocagrande").await;

        let (inquiry, property) = service
            .create_inquiry(NewInquiry {
                property_id: id,
                client: guest(),
                message: Some("Quisiera visitarlo".into()),
                kind: InquiryKind::Viewing,
                tour: Some(TourRequest {
                    date: date(2026, 3, 4),
                    time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
                }),
            })
            .await
            .unwrap();
        assert_eq!(property.details.title, "Penthouse Moderno Bocagrande");
        assert_eq!(service.inquiries(id).await.unwrap(), vec![inquiry]);
    }

    #[tokio::test]
    async fn inquiry_for_unknown_property_is_rejected() {
        let service = seeded_service().await;
        let err = service
            .create_inquiry(NewInquiry {
                property_id: PropertyId::new(77),
                client: guest(),
                message: None,
                kind: InquiryKind::General,
                tour: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::UnknownProperty { id: 77 })
        ));
    }

    #[tokio::test]
    async fn tours_skip_weekends() {
        let service = seeded_service().await;
        let id = id_of(&service, "Apartamento Moderno Manga").await;
        let days = service.tours(id).await.unwrap();
        assert_eq!(days.first().unwrap().date, date(2026, 3, 2));
        assert!(days.iter().all(|d| d.slots.len() == 8));
    }
}
