//! Named accessors, one path, query and query-array function per kind.
//!
//! Each is a thin wrapper over [`path`], [`query`] or [`query_all`] with the
//! kind fixed, for handlers that prefer `paramkit::path_u64(&req, "id")` to
//! turbofish syntax.

use crate::{path, query, query_all, ParamError, ParamSource};

macro_rules! named_accessors {
    ($($desc:literal, $ty:ty => $path:ident, $query:ident, $array:ident;)*) => {$(
        #[doc = concat!("Returns the path parameter `key` as ", $desc, ".")]
        ///
        /// See [`path`](crate::path()) for the error rules.
        pub fn $path<S: ParamSource + ?Sized>(source: &S, key: &str) -> Result<$ty, ParamError> {
            path::<$ty, S>(source, key)
        }

        #[doc = concat!("Returns the first query value for `key` as ", $desc, ".")]
        ///
        /// See [`query`](crate::query()) for the error rules.
        pub fn $query<S: ParamSource + ?Sized>(source: &S, key: &str) -> Result<$ty, ParamError> {
            query::<$ty, S>(source, key)
        }

        #[doc = concat!("Returns every query value for `key` as ", $desc, ", in order.")]
        ///
        /// See [`query_all`](crate::query_all()) for the error rules.
        pub fn $array<S: ParamSource + ?Sized>(
            source: &S,
            key: &str,
        ) -> Result<Vec<$ty>, ParamError> {
            query_all::<$ty, S>(source, key)
        }
    )*};
}

named_accessors! {
    "a string", String => path_string, query_string, query_string_array;
    "a platform-width signed integer", isize => path_int, query_int, query_int_array;
    "an 8-bit signed integer", i8 => path_i8, query_i8, query_i8_array;
    "a 16-bit signed integer", i16 => path_i16, query_i16, query_i16_array;
    "a 32-bit signed integer", i32 => path_i32, query_i32, query_i32_array;
    "a 64-bit signed integer", i64 => path_i64, query_i64, query_i64_array;
    "an unsigned integer with a 32-bit ceiling", usize => path_uint, query_uint, query_uint_array;
    "an 8-bit unsigned integer", u8 => path_u8, query_u8, query_u8_array;
    "a 16-bit unsigned integer", u16 => path_u16, query_u16, query_u16_array;
    "a 32-bit unsigned integer", u32 => path_u32, query_u32, query_u32_array;
    "a 64-bit unsigned integer", u64 => path_u64, query_u64, query_u64_array;
    "a boolean", bool => path_bool, query_bool, query_bool_array;
    "a 32-bit float", f32 => path_f32, query_f32, query_f32_array;
    "a 64-bit float", f64 => path_f64, query_f64, query_f64_array;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamContext;
    use http::Uri;

    #[test]
    fn test_named_path_accessors() {
        let ctx = ParamContext::builder()
            .path_param("name", "bar")
            .path_param("n", "-7")
            .path_param("flag", "True")
            .build();

        assert_eq!(path_string(&ctx, "name").unwrap(), "bar");
        assert_eq!(path_int(&ctx, "n").unwrap(), -7);
        assert_eq!(path_i8(&ctx, "n").unwrap(), -7);
        assert!(path_uint(&ctx, "n").is_err());
        assert!(path_bool(&ctx, "flag").unwrap());
        assert_eq!(path_f32(&ctx, "n").unwrap(), -7.0);
    }

    #[test]
    fn test_named_query_accessors() {
        let ctx = ParamContext::builder()
            .uri(Uri::from_static("/?n=32&n=255&b=1&b=f&s=x"))
            .build();

        assert_eq!(query_u8_array(&ctx, "n").unwrap(), vec![32, 255]);
        assert_eq!(query_u8(&ctx, "n").unwrap(), 32);
        assert_eq!(query_bool_array(&ctx, "b").unwrap(), vec![true, false]);
        assert_eq!(query_string(&ctx, "s").unwrap(), "x");
        assert_eq!(query_string_array(&ctx, "s").unwrap(), vec!["x".to_string()]);
        assert!(query_u64(&ctx, "missing").unwrap_err().is_missing());
    }
}
