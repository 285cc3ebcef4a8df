use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated on {constraint}")]
    Duplicate {
        constraint: &'static str,
    },

    #[error("document not found")]
    NotFound,
}
