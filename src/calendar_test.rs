use super::*;
use crate::api::types::BookingTour;

fn booking(id: i64, date: &str, people: u32, tour: Option<&str>) -> Booking {
    Booking {
        id,
        user_id: None,
        tour_id: None,
        date: date.to_owned(),
        people,
        status: None,
        price: None,
        user: None,
        tour: tour.map(|title| BookingTour { title: title.to_owned() }),
        guest_name: None,
        guest_email: None,
        guest_phone: None,
        total: None,
    }
}

#[test]
fn event_title_uses_tour_and_people() {
    let event = CalendarEvent::from(&booking(1, "2025-06-01", 3, Some("Canyon Hike")));
    assert_eq!(event.title, "Canyon Hike (3 people)");
    assert_eq!(event.booking_id, 1);
}

#[test]
fn event_title_falls_back_to_tour() {
    let event = CalendarEvent::from(&booking(1, "2025-06-01", 1, None));
    assert_eq!(event.title, "Tour (1 people)");
}

#[test]
fn event_title_falls_back_to_tour_for_blank_title() {
    let event = CalendarEvent::from(&booking(1, "2025-06-01", 2, Some("")));
    assert_eq!(event.title, "Tour (2 people)");
}

#[test]
fn day_of_takes_date_prefix() {
    assert_eq!(day_of("2025-06-01T09:30:00.000Z"), "2025-06-01");
    assert_eq!(day_of("2025-06-01"), "2025-06-01");
    assert_eq!(day_of("soon"), "soon");
}

#[test]
fn day_of_handles_multibyte_text() {
    assert_eq!(day_of("ünïcödé-dätë"), "ünïcödé-dätë");
}

#[test]
fn by_day_groups_and_orders() {
    let bookings = vec![
        booking(1, "2025-06-02T10:00:00Z", 2, Some("B")),
        booking(2, "2025-06-01T08:00:00Z", 1, Some("A")),
        booking(3, "2025-06-02T15:00:00Z", 4, None),
    ];
    let days = by_day(&bookings);
    let keys: Vec<&str> = days.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["2025-06-01", "2025-06-02"]);
    let second: Vec<i64> = days["2025-06-02"].iter().map(|e| e.booking_id).collect();
    assert_eq!(second, vec![1, 3]);
}

#[test]
fn events_preserve_order() {
    let bookings = vec![booking(5, "2025-01-01", 1, None), booking(4, "2024-01-01", 1, None)];
    let ids: Vec<i64> = events(&bookings).iter().map(|e| e.booking_id).collect();
    assert_eq!(ids, vec![5, 4]);
}
