//! Path parameter accessors.

use crate::config::AccessorConfig;
use crate::{ParamError, ParamKind, ParamLocation, ParamSource};

/// Returns the path parameter `key` converted to `T`.
///
/// An unbound key reads as the empty string. For the string kind an empty
/// binding is a missing parameter; every other kind hands the empty text to
/// its conversion, which rejects it.
///
/// # Errors
///
/// - [`MissingParameter`](crate::ParamErrorKind::MissingParameter) if `T` is
///   [`String`] and the binding is empty or absent.
/// - [`ConversionFailed`](crate::ParamErrorKind::ConversionFailed) if the
///   text is malformed or out of range for `T`.
///
/// # Example
///
/// ```rust
/// use paramkit::ParamContext;
///
/// let ctx = ParamContext::builder().path_param("id", "300").build();
///
/// let id: u16 = paramkit::path(&ctx, "id").unwrap();
/// assert_eq!(id, 300);
///
/// assert!(paramkit::path::<u8, _>(&ctx, "id").unwrap_err().is_conversion_failed());
/// assert!(paramkit::path::<String, _>(&ctx, "slug").unwrap_err().is_missing());
/// assert!(paramkit::path::<i32, _>(&ctx, "slug").unwrap_err().is_conversion_failed());
/// ```
pub fn path<T, S>(source: &S, key: &str) -> Result<T, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    path_with(source, key, &AccessorConfig::default())
}

/// [`path`] with an explicit [`AccessorConfig`].
pub fn path_with<T, S>(source: &S, key: &str, config: &AccessorConfig) -> Result<T, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    let raw = source.path_param(key).unwrap_or_default();

    if T::EMPTY_PATH_IS_MISSING && raw.is_empty() {
        return Err(config.rejected::<T>(ParamError::missing(ParamLocation::Path, key)));
    }

    T::convert(raw).map_err(|cause| {
        config.rejected::<T>(ParamError::conversion_failed(ParamLocation::Path, key, cause))
    })
}
