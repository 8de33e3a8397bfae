//! Tours Entity Module

pub mod tour;

pub use tour::{Difficulty, GeoKind, GeoPoint, Tour, TourFields};
