/// Error taxonomy for operations that cannot be expressed purely as an
/// absent return value (currently only [`crate::Allocator::init`]).
///
/// `alloc`/`realloc` report `ResourceExhausted` and `Unrepresentable`
/// failures as `None` directly, since every failable operation reports
/// failure via an absent return value; this enum exists so `init` has a
/// typed reason rather than a bare `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The page provider returned `None`.
    ResourceExhausted,
    /// The requested length maps to no size class and is not exactly one
    /// page.
    Unrepresentable,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ResourceExhausted => write!(f, "page provider exhausted"),
            Error::Unrepresentable => write!(f, "requested size is not representable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
