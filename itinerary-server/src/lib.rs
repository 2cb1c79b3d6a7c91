//! Itinerary editor server.
//!
//! Models a day-by-day travel plan, derives the markers and lines a map
//! draws for it, and serves both over a small JSON API alongside location
//! search.

pub mod config;
pub mod domain;
pub mod editor;
pub mod geocode;
pub mod payload;
pub mod route;
pub mod web;
