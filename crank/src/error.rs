use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CrankError {
    #[error("no buffer accounts configured")]
    EmptyPool,
    #[error("bootstrap failed: {0}")]
    Bootstrap(String),
}
