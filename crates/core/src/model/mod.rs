mod logo;
mod session;

pub use logo::{Logo, LogoError};
pub use session::{Feedback, Session, SessionError, SessionEvent};
