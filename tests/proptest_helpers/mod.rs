#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Arbitrary raw fuzzer buffers, biased toward symbol-shaped text so the
/// lookups get exercised past their first character checks.
pub fn arb_input_buffer() -> BoxedStrategy<Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..64),
        "[A-Za-z]{0,4}(-[0-9]{0,3})?( [0-9]{0,2}[+-])?".prop_map(|s| s.into_bytes()),
        "(H|He|Fe|U|Tc|D|T|e-|p\\+|n|alpha|nu_e|iron|\\+{1,4}|-{1,4})"
            .prop_map(|s| s.into_bytes()),
    ]
    .boxed()
}
