//! Query string decoding and query parameter accessors.
//!
//! [`query_all`] converts every value bound to a key, in order, and fails as
//! a whole if any one of them does not convert. [`query`] returns the first
//! converted value.

use crate::config::AccessorConfig;
use crate::{ParamError, ParamKind, ParamLocation, ParamSource};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How the raw query string is decoded into key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDecoding {
    /// `application/x-www-form-urlencoded` rules: `+` decodes to a space,
    /// then percent-decoding.
    #[default]
    Form,
    /// Percent-decoding only; `+` stays a literal plus sign.
    Percent,
}

impl QueryDecoding {
    /// Returns true if this decoding turns `+` into a space.
    #[must_use]
    pub fn plus_is_space(self) -> bool {
        matches!(self, Self::Form)
    }
}

impl fmt::Display for QueryDecoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form => write!(f, "form"),
            Self::Percent => write!(f, "percent"),
        }
    }
}

impl FromStr for QueryDecoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "percent" => Ok(Self::Percent),
            other => Err(format!("unknown query decoding '{other}'")),
        }
    }
}

/// Decoded key/value pairs of a query string, in their original order.
///
/// # Example
///
/// ```rust
/// use paramkit::{QueryDecoding, QueryValues};
///
/// let values = QueryValues::parse("fruit=apple&fruit=orange&empty=", QueryDecoding::Form);
///
/// assert_eq!(values.get_all("fruit"), Some(vec!["apple", "orange"]));
/// assert_eq!(values.get_all("empty"), Some(vec![""]));
/// assert_eq!(values.get_all("veggie"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryValues {
    pairs: Vec<(String, String)>,
}

impl QueryValues {
    /// Decodes `query` (without the leading `?`).
    ///
    /// A pair containing a malformed percent escape (`%` not followed by two
    /// hex digits) is dropped, so its key reads as absent.
    #[must_use]
    pub fn parse(query: &str, decoding: QueryDecoding) -> Self {
        let pairs = query.split('&').filter(|pair| has_valid_escapes(pair));

        let pairs = match decoding {
            QueryDecoding::Form => pairs
                .flat_map(|pair| form_urlencoded::parse(pair.as_bytes()))
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
            QueryDecoding::Percent => pairs
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    (percent_decode(key), percent_decode(value))
                })
                .collect(),
        };

        Self { pairs }
    }

    /// Decodes the query string of `source`; no query string decodes to no pairs.
    #[must_use]
    pub fn from_source<S: ParamSource + ?Sized>(source: &S, decoding: QueryDecoding) -> Self {
        source
            .raw_query()
            .map(|query| Self::parse(query, decoding))
            .unwrap_or_default()
    }

    /// Returns every value bound to `key` in order, or `None` if the key
    /// never appears.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Option<Vec<&str>> {
        let values: Vec<&str> = self
            .pairs
            .iter()
            .filter(|(bound, _)| bound == key)
            .map(|(_, value)| value.as_str())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    /// Returns the first value bound to `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if `key` appears at least once.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.first(key).is_some()
    }

    /// Returns the number of decoded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over decoded pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn has_valid_escapes(pair: &str) -> bool {
    pair.split('%').skip(1).all(|rest| {
        rest.as_bytes()
            .get(..2)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

// Form decoding has already turned a literal `+` into a space, which breaks
// exponents like `1E+10`. Only the first space is put back.
fn restore_plus(value: &str) -> Cow<'_, str> {
    if value.contains(' ') {
        Cow::Owned(value.replacen(' ', "+", 1))
    } else {
        Cow::Borrowed(value)
    }
}

/// Returns every value bound to the query key `key`, converted to `T`.
///
/// # Errors
///
/// - [`MissingParameter`](crate::ParamErrorKind::MissingParameter) if `key`
///   does not appear in the query string. A present key with an empty
///   value is not missing.
/// - [`ConversionFailed`](crate::ParamErrorKind::ConversionFailed) for the
///   first value that does not convert; no partial result is returned.
///
/// # Example
///
/// ```rust
/// use paramkit::ParamContext;
/// use http::Uri;
///
/// let ctx = ParamContext::builder()
///     .uri(Uri::from_static("/?age=23&age=42&name=oliver"))
///     .build();
///
/// let ages: Vec<i32> = paramkit::query_all(&ctx, "age").unwrap();
/// assert_eq!(ages, vec![23, 42]);
///
/// assert!(paramkit::query_all::<i32, _>(&ctx, "name").unwrap_err().is_conversion_failed());
/// assert!(paramkit::query_all::<i32, _>(&ctx, "height").unwrap_err().is_missing());
/// ```
pub fn query_all<T, S>(source: &S, key: &str) -> Result<Vec<T>, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    query_all_with(source, key, &AccessorConfig::default())
}

/// [`query_all`] with an explicit [`AccessorConfig`].
///
/// Float kinds get their first space restored to `+` only when the
/// configured decoding maps `+` to a space.
pub fn query_all_with<T, S>(
    source: &S,
    key: &str,
    config: &AccessorConfig,
) -> Result<Vec<T>, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    let values = QueryValues::from_source(source, config.query_decoding);

    let raw = values.get_all(key).ok_or_else(|| {
        config.rejected::<T>(ParamError::missing(ParamLocation::Query, key))
    })?;

    let restore = T::RESTORES_PLUS && config.query_decoding.plus_is_space();
    let mut out = Vec::with_capacity(raw.len());

    for value in raw {
        let value = if restore {
            restore_plus(value)
        } else {
            Cow::Borrowed(value)
        };

        let converted = T::convert(&value).map_err(|cause| {
            config.rejected::<T>(ParamError::conversion_failed(
                ParamLocation::Query,
                key,
                cause,
            ))
        })?;
        out.push(converted);
    }

    Ok(out)
}

/// Returns the first value bound to the query key `key`, converted to `T`.
///
/// Converts every bound value through [`query_all`] first, so a later
/// malformed value fails the call too.
///
/// # Example
///
/// ```rust
/// use paramkit::ParamContext;
/// use http::Uri;
///
/// let ctx = ParamContext::builder()
///     .uri(Uri::from_static("/?fruit=apple&fruit=orange"))
///     .build();
///
/// let fruit: String = paramkit::query(&ctx, "fruit").unwrap();
/// assert_eq!(fruit, "apple");
/// ```
pub fn query<T, S>(source: &S, key: &str) -> Result<T, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    query_with(source, key, &AccessorConfig::default())
}

/// [`query`] with an explicit [`AccessorConfig`].
pub fn query_with<T, S>(source: &S, key: &str, config: &AccessorConfig) -> Result<T, ParamError>
where
    T: ParamKind,
    S: ParamSource + ?Sized,
{
    query_all_with::<T, S>(source, key, config)?
        .into_iter()
        .next()
        .ok_or_else(|| ParamError::missing(ParamLocation::Query, key))
}
