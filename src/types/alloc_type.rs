#[cfg(feature = "std")]
pub type Box<T> = std::boxed::Box<T>;
#[cfg(not(feature = "std"))]
pub type Box<T> = alloc::boxed::Box<T>;

#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

/// Owned, thread-safe trait object for any raised failure.
#[cfg(feature = "std")]
pub type BoxError = std::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
#[cfg(not(feature = "std"))]
pub type BoxError = alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
