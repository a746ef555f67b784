use super::*;
use serde_json::json;

fn decode(value: serde_json::Value) -> Booking {
    serde_json::from_value(value).unwrap()
}

#[test]
fn guest_booking_uses_guest_contact() {
    let booking = decode(json!({
        "id": 1, "tour": { "title": "T" }, "user": null,
        "guestName": "Bob", "guestEmail": "b@x", "guestPhone": "555",
        "date": "2024-01-01T10:00:00.000Z", "people": 2, "status": "PENDING", "total": 99
    }));
    let details = BookingDetails::from(&booking);
    assert_eq!(details.customer, "Bob (b@x)");
    assert_eq!(details.phone, "555");
    assert_eq!(details.date, "2024-01-01");
    assert_eq!(details.total, Some(99.0));
}

#[test]
fn account_booking_shows_user_name_and_email() {
    let booking = decode(json!({
        "id": 2, "user": { "name": "Grace", "email": "grace@example.com" },
        "guestName": "ignored", "date": "2024-02-02", "people": 1
    }));
    let details = BookingDetails::from(&booking);
    assert_eq!(details.customer, "Grace (grace@example.com)");
    assert_eq!(details.phone, "N/A");
}

#[test]
fn account_booking_without_email_shows_name_only() {
    let booking = decode(json!({ "id": 3, "user": { "name": "Grace" }, "date": "2024-02-02", "people": 1 }));
    assert_eq!(BookingDetails::from(&booking).customer, "Grace");
}

#[test]
fn anonymous_booking_without_guest_name_is_guest() {
    let booking = decode(json!({ "id": 4, "guestName": "", "date": "2024-02-02", "people": 1 }));
    let details = BookingDetails::from(&booking);
    assert_eq!(details.customer, "Guest");
    assert_eq!(details.tour, "Tour");
    assert_eq!(details.status, "N/A");
    assert_eq!(details.total, None);
}

#[test]
fn total_falls_back_to_price() {
    let booking = decode(json!({ "id": 5, "date": "2024-02-02", "people": 1, "price": 45.5 }));
    assert_eq!(BookingDetails::from(&booking).total, Some(45.5));
}

#[test]
fn display_renders_one_field_per_line() {
    let booking = decode(json!({
        "id": 6, "tour": { "title": "Canyon Hike" }, "guestName": "Bob",
        "date": "2024-03-03", "people": 3, "status": "CONFIRMED", "total": 120
    }));
    let rendered = BookingDetails::from(&booking).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Booking #6");
    assert_eq!(lines[1], "Tour:     Canyon Hike");
    assert_eq!(lines[2], "Customer: Bob");
    assert_eq!(lines.last().copied(), Some("Total:    $120"));
}
