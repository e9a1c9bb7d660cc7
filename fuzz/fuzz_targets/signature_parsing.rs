#![no_main]

use std::str::FromStr;

use jvm_signatures::types::{
    parse_modified_utf8,
    signatures::{ClassSignature, MethodSignature, TypeSignature},
};
use libfuzzer_sys::fuzz_target;

fn check_round_trip<S>(input: &str)
where
    S: FromStr + ToString + PartialEq + std::fmt::Debug,
{
    if let Ok(parsed) = S::from_str(input) {
        let rendered = parsed.to_string();
        let reparsed = S::from_str(&rendered).ok();
        assert_eq!(reparsed.as_ref(), Some(&parsed));
    }
}

fuzz_target!(|data: &[u8]| {
    let _ = parse_modified_utf8::<MethodSignature>(data);
    if let Ok(input) = std::str::from_utf8(data) {
        check_round_trip::<TypeSignature>(input);
        check_round_trip::<MethodSignature>(input);
        check_round_trip::<ClassSignature>(input);
    }
});
