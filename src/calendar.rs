//! Calendar view of bookings.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use crate::api::types::Booking;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub booking_id: i64,
    pub title: String,
    pub date: String,
    pub people: u32,
}

impl From<&Booking> for CalendarEvent {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id,
            title: format!("{} ({} people)", booking.tour_title(), booking.people),
            date: booking.date.clone(),
            people: booking.people,
        }
    }
}

/// Calendar day of a booking date: the `YYYY-MM-DD` prefix of an ISO date or
/// timestamp, or the whole string when it is shorter.
#[must_use]
pub fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

#[must_use]
pub fn events(bookings: &[Booking]) -> Vec<CalendarEvent> {
    bookings.iter().map(CalendarEvent::from).collect()
}

/// Events grouped by day, days in ascending order, bookings in input order.
#[must_use]
pub fn by_day(bookings: &[Booking]) -> BTreeMap<String, Vec<CalendarEvent>> {
    let mut days: BTreeMap<String, Vec<CalendarEvent>> = BTreeMap::new();
    for booking in bookings {
        days.entry(day_of(&booking.date).to_owned())
            .or_default()
            .push(CalendarEvent::from(booking));
    }
    days
}
