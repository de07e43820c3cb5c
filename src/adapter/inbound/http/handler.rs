//! Route handlers.
//!
//! Each handler parses its inputs into domain types, calls the
//! [`CatalogService`](crate::app::CatalogService) and wraps the result in
//! the JSON envelope.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::adapter::inbound::http::dto::{
    ApiResponse, AvailabilityParams, BookingCreatedResponse, BookingResponse,
    CreateBookingRequest, CreateInquiryRequest, InquiryCreatedResponse, InquiryResponse,
    ListParams, PropertyResponse, QuoteParams, SearchResponse,
};
use crate::adapter::inbound::http::error::ApiErrorResponse;
use crate::app::AppState;
use crate::domain::error::DomainError;
use crate::domain::{CalendarDay, CatalogStats, PropertyId, RawSearchParams, StayQuote, TourDay};
use crate::port::CatalogStore;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /`: service banner and endpoint index.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Luxury Real Estate API - Cartagena",
        "version": VERSION,
        "endpoints": {
            "properties": "/api/properties",
            "search": "/api/properties/search",
            "property": "/api/properties/{id}",
            "availability": "/api/properties/{id}/availability",
            "quote": "/api/properties/{id}/quote",
            "tours": "/api/properties/{id}/tours",
            "bookings": "/api/bookings",
            "inquiries": "/api/inquiries",
            "stats": "/api/stats",
            "health": "/health"
        }
    }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}

/// `GET /api/properties?type=&status=`
pub async fn list_properties<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<ApiResponse<Vec<PropertyResponse>>> {
    let Query(params) = params?;
    let (kind, status) = params.parse()?;
    let properties = state.service().list_properties(kind, status).await?;
    Ok(Json(ApiResponse::list(
        properties.into_iter().map(PropertyResponse::from).collect(),
    )))
}

/// `GET /api/properties/search`
pub async fn search_properties<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    params: Result<Query<RawSearchParams>, QueryRejection>,
) -> ApiResult<SearchResponse> {
    let Query(query) = params?;
    let properties = state.service().search(&query).await?;
    Ok(Json(SearchResponse {
        success: true,
        count: properties.len(),
        data: properties.into_iter().map(PropertyResponse::from).collect(),
        query,
    }))
}

/// `GET /api/properties/{id}`
pub async fn get_property<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<PropertyResponse>> {
    let property = state.service().property(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(property.into())))
}

/// `GET /api/properties/{id}/availability?from=&days=`
pub async fn get_availability<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    params: Result<Query<AvailabilityParams>, QueryRejection>,
) -> ApiResult<ApiResponse<Vec<CalendarDay>>> {
    let id = parse_id(&id)?;
    let Query(params) = params?;
    let (from, days) = params.parse()?;
    let calendar = state.service().availability(id, from, days).await?;
    Ok(Json(ApiResponse::list(calendar)))
}

/// `GET /api/properties/{id}/quote?checkIn=&checkOut=&guests=`
pub async fn get_quote<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> ApiResult<ApiResponse<StayQuote>> {
    let id = parse_id(&id)?;
    let Query(params) = params?;
    let stay = params.parse()?;
    let quote = state.service().quote(id, stay).await?;
    Ok(Json(ApiResponse::ok(quote)))
}

/// `GET /api/properties/{id}/tours`
pub async fn get_tours<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Vec<TourDay>>> {
    let days = state.service().tours(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::list(days)))
}

/// `GET /api/properties/{id}/bookings`
pub async fn list_bookings<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Vec<BookingResponse>>> {
    let bookings = state.service().bookings(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::list(
        bookings.into_iter().map(BookingResponse::from).collect(),
    )))
}

/// `GET /api/properties/{id}/inquiries`
pub async fn list_inquiries<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Vec<InquiryResponse>>> {
    let inquiries = state.service().inquiries(parse_id(&id)?).await?;
    Ok(Json(ApiResponse::list(
        inquiries.into_iter().map(InquiryResponse::from).collect(),
    )))
}

/// `POST /api/bookings`
pub async fn create_booking<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiErrorResponse> {
    let Json(request) = body?;
    let draft = request.into_draft()?;
    let (booking, property) = state.service().create_booking(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            success: true,
            message: "Booking created successfully",
            booking_id: booking.id.get(),
            data: booking.into(),
            property: (&property).into(),
        }),
    ))
}

/// `POST /api/inquiries`
pub async fn create_inquiry<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateInquiryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InquiryCreatedResponse>), ApiErrorResponse> {
    let Json(request) = body?;
    let inquiry = request.into_new_inquiry()?;
    let (inquiry, property) = state.service().create_inquiry(inquiry).await?;
    Ok((
        StatusCode::CREATED,
        Json(InquiryCreatedResponse {
            success: true,
            message: "Inquiry submitted successfully",
            inquiry_id: inquiry.id.get(),
            data: inquiry.into(),
            property: (&property).into(),
        }),
    ))
}

/// `GET /api/stats`
pub async fn get_stats<S: CatalogStore + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<ApiResponse<CatalogStats>> {
    let stats = state.service().stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// Ids that are not integers are a client error, not a missing row.
fn parse_id(raw: &str) -> Result<PropertyId, ApiErrorResponse> {
    raw.trim()
        .parse::<i32>()
        .map(PropertyId::new)
        .map_err(|_| {
            DomainError::InvalidField {
                field: "id",
                reason: format!("'{raw}' is not a property id"),
            }
            .into()
        })
}
