pub mod tour_response;

pub use tour_response::{GuideSummary, ReviewResponse, TourResponse};
