use pricing::error::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("scenario axis must contain at least one point")]
    EmptyAxis,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
