pub mod tour_draft;

pub use tour_draft::TourDraft;
