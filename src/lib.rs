//! # tourdesk
//!
//! Admin client for the tour-booking backend. Owns the operator session,
//! gates protected views behind a route guard, and talks to the REST API
//! through a typed gateway client.
//!
//! DESIGN
//! ======
//! The session is an explicit `SessionStore` value shared as an `Arc`
//! between the gateway client and whatever renders views. Nothing reads
//! ambient global state; storage and navigation are injected as traits so
//! the same code drives the CLI and the tests.

pub mod api;
pub mod booking_details;
pub mod calendar;
pub mod config;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod tour_draft;
