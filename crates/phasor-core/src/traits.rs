use crate::error::Result;

/// Validate that a configuration or value is usable before any work is done with it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
