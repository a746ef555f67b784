//! Booking endpoints.

use reqwest::Method;

use super::types::{Booking, NewBooking};
use super::{ApiClient, ApiError, Credentials, Endpoint, encode};

const FETCH_BOOKINGS: Endpoint = Endpoint { name: "fetch bookings", fallback: "Failed to fetch bookings" };
const CREATE_BOOKING: Endpoint = Endpoint { name: "create booking", fallback: "Failed to create booking" };

impl ApiClient {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call is rejected or the list does not
    /// decode.
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.request(Method::GET, "/api/bookings", None, Credentials::Session, FETCH_BOOKINGS)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the validation messages when the
    /// backend refuses the booking.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        let body = encode(booking)?;
        self.request(Method::POST, "/api/bookings", Some(body), Credentials::Session, CREATE_BOOKING)
            .await
    }
}
