//! # Tour Data Transfer Objects Module
//!
//! ```text
//! tours/
//! ├── request/
//! │   └── tour_draft.rs     # 생성/부분 수정 공용 요청 (TourDraft → TourFields)
//! └── response/
//!     └── tour_response.rs  # TourResponse, GuideSummary, ReviewResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
