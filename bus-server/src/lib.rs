//! Bus departure monitor server.
//!
//! Polls the Swiss public transport stationboard API for a configured
//! set of bus routes and republishes upcoming departures, with delay
//! status, as a small JSON API for a home dashboard.

pub mod config;
pub mod departures;
pub mod transport;
pub mod web;
