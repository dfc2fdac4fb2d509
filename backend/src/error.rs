use thiserror::Error;

/// The two failure modes of the toolchain smoke test. Both are fatal:
/// there is nothing meaningful to retry once the platform says no.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to initialize SDL video subsystem: {0}")]
    Init(String),
    #[error("failed to create window: {0}")]
    WindowCreation(String),
}
