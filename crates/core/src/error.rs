use thiserror::Error;

use crate::model::{LogoError, SessionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Logo(#[from] LogoError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
