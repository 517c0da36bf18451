use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Search pattern could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
