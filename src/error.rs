/// Errors returned by the fallible container accessors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A strict lookup such as [`OrderedMap::at`](crate::OrderedMap::at) found no entry for the key.
    #[error("key not found")]
    KeyNotFound,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn key_not_found_displays() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }
}
