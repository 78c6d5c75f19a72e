//! Accessor behaviour against requests built the way a router delivers them.

use http::Request;
use paramkit::*;
use paramkit_test::{init_test_logging, TestRequest};

const KEY: &str = "chiRocks";

fn path_request(value: &str) -> Request<()> {
    init_test_logging();
    TestRequest::get("/").path_param(KEY, value).build().unwrap()
}

fn query_request(query: &str) -> Request<()> {
    init_test_logging();
    TestRequest::get("/").raw_query(query).build().unwrap()
}

mod path_params {
    use super::*;

    #[test]
    fn string() {
        assert_eq!(path_string(&path_request("bar"), KEY).unwrap(), "bar");
        assert!(path_string(&path_request("whoops"), "fail").unwrap_err().is_missing());
    }

    #[test]
    fn int() {
        assert_eq!(path_int(&path_request("2301342"), KEY).unwrap(), 2_301_342);
        assert!(path_int(&path_request("one"), KEY).is_err());
    }

    #[test]
    fn signed_widths_at_max() {
        assert_eq!(path_i8(&path_request("127"), KEY).unwrap(), i8::MAX);
        assert_eq!(path_i16(&path_request("32767"), KEY).unwrap(), i16::MAX);
        assert_eq!(path_i32(&path_request("2147483647"), KEY).unwrap(), i32::MAX);
        assert_eq!(
            path_i64(&path_request("9223372036854775807"), KEY).unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn signed_widths_one_past_max() {
        assert!(path_i8(&path_request("128"), KEY).unwrap_err().is_conversion_failed());
        assert!(path_i16(&path_request("32768"), KEY).unwrap_err().is_conversion_failed());
        assert!(path_i32(&path_request("2147483648"), KEY)
            .unwrap_err()
            .is_conversion_failed());
        assert!(path_i64(&path_request("9223372036854775808"), KEY)
            .unwrap_err()
            .is_conversion_failed());
    }

    #[test]
    fn unsigned_widths_at_max() {
        assert_eq!(path_uint(&path_request("4294967295"), KEY).unwrap(), 4_294_967_295);
        assert_eq!(path_u8(&path_request("255"), KEY).unwrap(), u8::MAX);
        assert_eq!(path_u16(&path_request("65535"), KEY).unwrap(), u16::MAX);
        assert_eq!(path_u32(&path_request("4294967295"), KEY).unwrap(), u32::MAX);
        assert_eq!(
            path_u64(&path_request("18446744073709551615"), KEY).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn unsigned_widths_one_past_max() {
        assert!(path_uint(&path_request("4294967296"), KEY).is_err());
        assert!(path_u8(&path_request("256"), KEY).is_err());
        assert!(path_u16(&path_request("65536"), KEY).is_err());
        assert!(path_u32(&path_request("4294967296"), KEY).is_err());
        assert!(path_u64(&path_request("18446744073709551616"), KEY).is_err());
    }

    #[test]
    fn unsigned_rejects_plus_sign() {
        assert!(path_u8(&path_request("+5"), KEY).unwrap_err().is_conversion_failed());
        assert!(path_uint(&path_request("+5"), KEY).unwrap_err().is_conversion_failed());
        assert!(path_u64(&path_request("+5"), KEY).unwrap_err().is_conversion_failed());
        assert_eq!(path_i64(&path_request("+5"), KEY).unwrap(), 5);
    }

    #[test]
    fn boolean() {
        assert!(path_bool(&path_request("true"), KEY).unwrap());
        assert!(!path_bool(&path_request("F"), KEY).unwrap());
        assert!(path_bool(&path_request("truth!"), KEY).is_err());
    }

    #[test]
    fn floats_at_max() {
        assert_eq!(path_f32(&path_request("3.4028235E+38"), KEY).unwrap(), f32::MAX);
        assert_eq!(
            path_f64(&path_request("1.7976931348623157E+308"), KEY).unwrap(),
            f64::MAX
        );
    }

    #[test]
    fn floats_malformed() {
        assert!(path_f32(&path_request("pi"), KEY).is_err());
        assert!(path_f64(&path_request("pi"), KEY).is_err());
    }

    #[test]
    fn repeated_binding_reads_latest() {
        let req = TestRequest::get("/")
            .path_param("id", "1")
            .path_param("id", "2")
            .build()
            .unwrap();

        assert_eq!(path_u8(&req, "id").unwrap(), 2);
    }

    #[test]
    fn works_on_request_parts() {
        let (parts, ()) = path_request("17").into_parts();
        assert_eq!(path_u8(&parts, KEY).unwrap(), 17);
    }
}

mod query_params {
    use super::*;

    #[test]
    fn string_array() {
        let req = query_request("fruit=apple&fruit=orange&veggie=pepper");

        assert_eq!(query_string_array(&req, "fruit").unwrap(), vec!["apple", "orange"]);
        assert!(query_string_array(&req, "meat").unwrap_err().is_missing());
    }

    #[test]
    fn int_array() {
        let req = query_request("age=23&age=42&name=oliver");

        assert_eq!(query_int_array(&req, "age").unwrap(), vec![23, 42]);
        assert!(query_int_array(&req, "name").unwrap_err().is_conversion_failed());
    }

    #[test]
    fn signed_arrays_span_full_width() {
        let req = query_request(
            "a=-128&a=127&b=-32768&b=32767&c=-2147483648&c=2147483647\
             &d=-9223372036854775808&d=9223372036854775807",
        );

        assert_eq!(query_i8_array(&req, "a").unwrap(), vec![i8::MIN, i8::MAX]);
        assert_eq!(query_i16_array(&req, "b").unwrap(), vec![i16::MIN, i16::MAX]);
        assert_eq!(query_i32_array(&req, "c").unwrap(), vec![i32::MIN, i32::MAX]);
        assert_eq!(query_i64_array(&req, "d").unwrap(), vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn narrow_arrays_reject_wider_values() {
        let req = query_request("a=32767&b=2147483647&c=9223372036854775807");

        assert!(query_i8_array(&req, "a").is_err());
        assert!(query_i16_array(&req, "b").is_err());
        assert!(query_i32_array(&req, "c").is_err());
    }

    #[test]
    fn unsigned_arrays() {
        let req = query_request(
            "w=32&w=4294967295&a=32&a=255&b=32&b=65535&c=32&c=4294967295\
             &d=32&d=18446744073709551615&bad=notanint",
        );

        assert_eq!(query_uint_array(&req, "w").unwrap(), vec![32, 4_294_967_295]);
        assert_eq!(query_u8_array(&req, "a").unwrap(), vec![32, u8::MAX]);
        assert_eq!(query_u16_array(&req, "b").unwrap(), vec![32, u16::MAX]);
        assert_eq!(query_u32_array(&req, "c").unwrap(), vec![32, u32::MAX]);
        assert_eq!(query_u64_array(&req, "d").unwrap(), vec![32, u64::MAX]);
        assert!(query_u64_array(&req, "bad").is_err());
    }

    #[test]
    fn unsigned_arrays_reject_plus_sign() {
        let req = TestRequest::get("/").query("n", "+5").build().unwrap();

        assert!(query_u16_array(&req, "n").unwrap_err().is_conversion_failed());
        assert!(query_uint(&req, "n").unwrap_err().is_conversion_failed());
        assert_eq!(query_int_array(&req, "n").unwrap(), vec![5]);
    }

    #[test]
    fn bool_array() {
        let req = query_request("options=true&options=false&bad=truth");

        assert_eq!(query_bool_array(&req, "options").unwrap(), vec![true, false]);
        assert!(query_bool_array(&req, "bad").unwrap_err().is_conversion_failed());
    }

    #[test]
    fn float_arrays_with_exponent_signs() {
        let req = query_request(
            "a=1.4E-45&a=3.4028235E+38&b=4.9406564584124654E-324&b=1.7976931348623157E+308",
        );

        assert_eq!(
            query_f32_array(&req, "a").unwrap(),
            vec![f32::from_bits(1), f32::MAX]
        );
        assert_eq!(
            query_f64_array(&req, "b").unwrap(),
            vec![f64::from_bits(1), f64::MAX]
        );
    }

    #[test]
    fn float_arrays_malformed() {
        let req = query_request("result=notafloat");

        assert!(query_f64_array(&req, "opts").unwrap_err().is_missing());
        assert!(query_f64_array(&req, "result").unwrap_err().is_conversion_failed());
        assert!(query_f32_array(&req, "result").unwrap_err().is_conversion_failed());
    }

    #[test]
    fn encoded_plus_is_not_altered() {
        let req = TestRequest::get("/").query("x", "1E+10").build().unwrap();
        assert_eq!(query_f64(&req, "x").unwrap(), 1e10);
    }

    #[test]
    fn scalars_take_first_value() {
        let req = query_request("fruit=apple&fruit=orange&n=-1&n=2&f=0.5&b=t&b=f");

        assert_eq!(query_string(&req, "fruit").unwrap(), "apple");
        assert_eq!(query_i64(&req, "n").unwrap(), -1);
        assert_eq!(query_f64(&req, "f").unwrap(), 0.5);
        assert!(query_bool(&req, "b").unwrap());
    }

    #[test]
    fn scalars_propagate_errors() {
        let req = query_request("fruit=apple&n=1&n=x");

        assert!(query_string(&req, "veggie").unwrap_err().is_missing());
        assert!(query_u32(&req, "n").unwrap_err().is_conversion_failed());
        assert!(query_uint(&req, "fruit").unwrap_err().is_conversion_failed());
        assert!(query_i16(&req, "none").unwrap_err().is_missing());
        assert!(query_i8(&req, "fruit").is_err());
        assert!(query_int(&req, "fruit").is_err());
        assert!(query_u8(&req, "fruit").is_err());
        assert!(query_u16(&req, "fruit").is_err());
        assert!(query_u64(&req, "fruit").is_err());
        assert!(query_f32(&req, "fruit").is_err());
    }

    #[test]
    fn present_empty_value_is_not_missing() {
        let req = query_request("name=&flag");

        assert_eq!(query_string(&req, "name").unwrap(), "");
        assert_eq!(query_string(&req, "flag").unwrap(), "");
        assert!(query_i32(&req, "name").unwrap_err().is_conversion_failed());
    }

    #[test]
    fn malformed_escape_is_missing() {
        let req = query_request("x=%zz&n=%4&n=7");

        assert!(query_string(&req, "x").unwrap_err().is_missing());
        assert_eq!(query_u8_array(&req, "n").unwrap(), vec![7]);
    }

    #[test]
    fn no_query_string_is_missing() {
        let req = TestRequest::get("/plain").build().unwrap();
        assert!(query_string(&req, "anything").unwrap_err().is_missing());
    }

    #[test]
    fn percent_decoding_config() {
        let req = query_request("x=1E+10&s=a+b");
        let config = AccessorConfig::default().with_query_decoding(QueryDecoding::Percent);

        assert_eq!(query_with::<f64, _>(&req, "x", &config).unwrap(), 1e10);
        assert_eq!(query_with::<String, _>(&req, "s", &config).unwrap(), "a+b");
        assert_eq!(query::<String, _>(&req, "s").unwrap(), "a b");
    }
}

#[test]
fn context_and_request_agree() {
    let req = TestRequest::get("/users/7")
        .path_param("id", "7")
        .query("tag", "x")
        .build()
        .unwrap();
    let ctx = ParamContext::from(&req);

    assert_eq!(path_u64(&req, "id").unwrap(), path_u64(&ctx, "id").unwrap());
    assert_eq!(
        query_string_array(&req, "tag").unwrap(),
        query_string_array(&ctx, "tag").unwrap()
    );
}

#[test]
fn errors_map_to_client_status() {
    let req = path_request("x");

    let err = path_u8(&req, KEY).unwrap_err();
    assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
    assert_eq!(err.error_code(), "INVALID_PARAMETER");
    assert_eq!(err.kind(), ParamErrorKind::ConversionFailed);

    let err = query_u8(&req, KEY).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PARAMETER");
    assert_eq!(err.location(), ParamLocation::Query);
}
