//! Tour endpoints.

use reqwest::Method;

use super::types::{Deleted, Tour, TourInput};
use super::{ApiClient, ApiError, Credentials, Endpoint, encode};

const FETCH_TOURS: Endpoint = Endpoint { name: "fetch tours", fallback: "Failed to fetch tours" };
const CREATE_TOUR: Endpoint = Endpoint { name: "create tour", fallback: "Failed to create tour" };
const UPDATE_TOUR: Endpoint = Endpoint { name: "update tour", fallback: "Failed to update tour" };
const DELETE_TOUR: Endpoint = Endpoint { name: "delete tour", fallback: "Failed to delete tour" };

fn tour_path(id: i64) -> String {
    format!("/api/tours/{id}")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call is rejected or the list does not
    /// decode.
    pub async fn fetch_tours(&self) -> Result<Vec<Tour>, ApiError> {
        self.request(Method::GET, "/api/tours", None, Credentials::Session, FETCH_TOURS)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the validation messages when the
    /// backend refuses the tour.
    pub async fn create_tour(&self, tour: &TourInput) -> Result<Tour, ApiError> {
        let body = encode(tour)?;
        self.request(Method::POST, "/api/tours", Some(body), Credentials::Session, CREATE_TOUR)
            .await
    }

    /// Replace tour `id` with `tour`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the validation messages when the
    /// backend refuses the update.
    pub async fn update_tour(&self, id: i64, tour: &TourInput) -> Result<Tour, ApiError> {
        let body = encode(tour)?;
        self.request(Method::PUT, &tour_path(id), Some(body), Credentials::Session, UPDATE_TOUR)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the backend refuses the deletion.
    pub async fn delete_tour(&self, id: i64) -> Result<Deleted, ApiError> {
        let deleted: Option<Deleted> = self
            .request(Method::DELETE, &tour_path(id), None, Credentials::Session, DELETE_TOUR)
            .await?;
        Ok(deleted.unwrap_or_default())
    }
}
