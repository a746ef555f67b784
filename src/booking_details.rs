//! Detail view of a single booking.
//!
//! Account bookings show the user's name and email; guest bookings fall back
//! to the guest contact fields, then to `Guest`.

#[cfg(test)]
#[path = "booking_details_test.rs"]
mod booking_details_test;

use std::fmt;

use crate::api::types::Booking;
use crate::calendar::day_of;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking_id: i64,
    pub tour: String,
    pub customer: String,
    pub phone: String,
    pub date: String,
    pub people: u32,
    pub status: String,
    pub total: Option<f64>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn with_email(name: &str, email: Option<&str>) -> String {
    match email {
        Some(email) => format!("{name} ({email})"),
        None => name.to_owned(),
    }
}

impl From<&Booking> for BookingDetails {
    fn from(booking: &Booking) -> Self {
        let customer = match &booking.user {
            Some(user) => with_email(&user.name, present(user.email.as_ref())),
            None => with_email(
                present(booking.guest_name.as_ref()).unwrap_or("Guest"),
                present(booking.guest_email.as_ref()),
            ),
        };
        Self {
            booking_id: booking.id,
            tour: booking.tour_title().to_owned(),
            customer,
            phone: present(booking.guest_phone.as_ref()).unwrap_or(NOT_AVAILABLE).to_owned(),
            date: day_of(&booking.date).to_owned(),
            people: booking.people,
            status: present(booking.status.as_ref()).unwrap_or(NOT_AVAILABLE).to_owned(),
            total: booking.total.or(booking.price),
        }
    }
}

impl fmt::Display for BookingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking #{}", self.booking_id)?;
        writeln!(f, "Tour:     {}", self.tour)?;
        writeln!(f, "Customer: {}", self.customer)?;
        writeln!(f, "Phone:    {}", self.phone)?;
        writeln!(f, "Date:     {}", self.date)?;
        writeln!(f, "People:   {}", self.people)?;
        writeln!(f, "Status:   {}", self.status)?;
        match self.total {
            Some(total) => write!(f, "Total:    ${total}"),
            None => write!(f, "Total:    {NOT_AVAILABLE}"),
        }
    }
}
