use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}
