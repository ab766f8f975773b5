pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Unwraps a required argument, failing with `InvalidArgument` when it is absent.
#[inline]
pub fn require_arg<T>(value: Option<T>, name: &str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(missing_arg(name)),
    }
}

#[cold]
fn missing_arg(name: &str) -> crate::error::Error {
    crate::error::Error::invalid_arg(name, "argument is required")
}
