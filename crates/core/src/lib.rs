#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod normalize;

pub use countdown::Countdown;
pub use error::Error;
