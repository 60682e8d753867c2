#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod images;
pub mod quiz_service;
pub mod sampler;

pub use catalog::LogoCatalog;
pub use error::{CatalogError, QuizError};
pub use images::ImageResolver;
pub use quiz_service::{DEFAULT_HINT_SECONDS, DEFAULT_ROUND_COUNT, QuizService};
pub use sampler::{draw_rounds, draw_rounds_with};
