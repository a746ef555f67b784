//! Wire types for the booking backend.
//!
//! Every response is decoded into one of these records; a payload that does
//! not match is a decode error rather than a half-filled value. Field names
//! follow the backend's camelCase JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Projection of the booking's user, as embedded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Title-only projection of the booking's tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingTour {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub tour_id: Option<i64>,
    pub date: String,
    pub people: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub tour: Option<BookingTour>,
    /// Contact details for bookings made without an account.
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub guest_email: Option<String>,
    #[serde(default)]
    pub guest_phone: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Booking {
    /// Title of the booked tour, or `Tour` when it is missing or blank.
    #[must_use]
    pub fn tour_title(&self) -> &str {
        self.tour
            .as_ref()
            .map(|tour| tour.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or("Tour")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: i64,
    pub tour_id: i64,
    pub date: String,
    pub people: u32,
}

// =============================================================================
// TOURS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourKind {
    #[default]
    Single,
    Multi,
}

impl std::str::FromStr for TourKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            other => Err(format!("unknown tour type `{other}` (expected single or multi)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPlan {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub included: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "one_day")]
    pub days: u32,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: TourKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub tour_plans: Vec<TourPlan>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
}

fn one_day() -> u32 {
    1
}

/// Body for creating or replacing a tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub days: u32,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: TourKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub tour_plans: Vec<TourPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<f64>,
}

impl From<&Tour> for TourInput {
    fn from(tour: &Tour) -> Self {
        Self {
            title: tour.title.clone(),
            description: tour.description.clone(),
            location: tour.location.clone(),
            days: tour.days,
            price: tour.price,
            kind: tour.kind,
            category: tour.category.clone(),
            categories: tour.categories.clone(),
            included: tour.included.clone(),
            excluded: tour.excluded.clone(),
            tour_plans: tour.tour_plans.clone(),
            status: tour.status.clone(),
            completion_percentage: tour.completion_percentage,
        }
    }
}

/// Deletion confirmation. Backends that answer with an empty body decode to
/// the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(default)]
    pub message: Option<String>,
}
