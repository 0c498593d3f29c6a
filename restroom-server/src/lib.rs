//! NYC restroom locator server.
//!
//! Loads public restroom, park and transit facility records from NYC Open
//! Data, normalizes them, and answers "where is the nearest restroom I can
//! use right now?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod geocode;
pub mod geodesy;
pub mod hours;
pub mod locator;
pub mod normalize;
pub mod opendata;
pub mod web;
