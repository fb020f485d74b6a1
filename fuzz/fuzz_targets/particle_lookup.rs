//! Fuzz target for particle symbol lookups.
//!
//! This fuzzer decodes each input into a symbol and an integer, then runs
//! the atomic-number, element-name, and mass lookups over them, checking for
//! panics, crashes, or hangs. Lookup errors are the expected outcome for
//! random input and are discarded.
//!
//! Run with:
//!   cargo +nightly fuzz run particle_lookup
//!
//! Or with a corpus:
//!   cargo +nightly fuzz run particle_lookup fuzz/corpus/particle_lookup/

#![no_main]

use std::sync::Once;

use libfuzzer_sys::fuzz_target;
use particlekit::driver::{init, lookup_round};

static INIT: Once = Once::new();

fuzz_target!(|data: &[u8]| {
    // Build the lookup tables before the first iteration, not during one.
    INIT.call_once(init);

    // Cap input size to keep iterations fast. Particle symbols are tiny;
    // 64KiB is already far beyond anything meaningful.
    if data.len() > 64 * 1024 {
        return;
    }

    // Run one lookup round. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = lookup_round(data);
});
