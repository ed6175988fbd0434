pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("subscriber store is unavailable: {0}")]
    Unavailable(String),
}
