//! The fuzz driver: turn raw fuzzer bytes into lookup arguments and run one
//! round of lookups over them.
//!
//! This module is what the `particle_lookup` fuzz target calls. It is kept in
//! the library (rather than inline in the target) so the decode and the round
//! stay deterministic, unit-testable, and reusable from the benches.
//!
//! Decoding order is load-bearing: the symbol consumes the *entire* buffer,
//! so the integer is always read from an exhausted source and comes out 0.
//! That mirrors the harness this one replaces; existing corpora reproduce
//! byte-for-byte only if the order stays put.

use arbitrary::Unstructured;

use crate::element::element_name;
use crate::error::ParticleError;
use crate::particle::{atomic_number, particle_mass};

/// Build the lookup tables once, before fuzzing starts.
///
/// Fuzz targets and the CLI call this at startup so registry construction
/// never lands inside a fuzzing iteration.
pub fn init() {
    crate::element::init();
}

/// Deterministically decode one round's inputs from raw bytes.
///
/// The symbol is the whole buffer, decoded lossily as UTF-8 (replacement
/// characters for ill-formed sequences; surrogate code points cannot occur in
/// a Rust string). The integer is then read from whatever is left, which is
/// nothing, so [`Unstructured`] zero-fills it.
pub fn decode_round_inputs(data: &[u8]) -> (String, u64) {
    let mut u = Unstructured::new(data);
    let remaining = u.len();
    let text_bytes = u.bytes(remaining).unwrap_or_default();
    let symbol = String::from_utf8_lossy(text_bytes).into_owned();
    let number = u.arbitrary::<u64>().unwrap_or_default();
    (symbol, number)
}

/// Run the three lookups over already-decoded inputs, as one group.
///
/// The `?` short-circuit is deliberate: an expected error from an earlier
/// call skips the later calls in the round, the same containment boundary as
/// a single try block around all three.
pub fn run_lookups(symbol: &str, number: u64) -> Result<(), ParticleError> {
    let _ = atomic_number(symbol)?;
    let _ = element_name(number)?;
    let _ = particle_mass(symbol)?;
    Ok(())
}

/// One full fuzzing iteration: decode, then look up.
///
/// For every possible input this either returns `Ok` or one of the two
/// [`ParticleError`] kinds; callers fuzzing the library just drop the
/// `Result`. A panic anywhere below here is a genuine finding.
pub fn lookup_round(data: &[u8]) -> Result<(), ParticleError> {
    let (symbol, number) = decode_round_inputs(data);
    run_lookups(&symbol, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_decodes_to_defaults() {
        assert_eq!(decode_round_inputs(&[]), (String::new(), 0));
    }

    #[test]
    fn test_symbol_consumes_entire_buffer() {
        let (symbol, number) = decode_round_inputs(b"Fe 3+");
        assert_eq!(symbol, "Fe 3+");
        // Nothing is left for the integer.
        assert_eq!(number, 0);
    }

    #[test]
    fn test_ill_formed_utf8_decodes_lossily() {
        let (symbol, _) = decode_round_inputs(&[0x48, 0xff, 0xfe]);
        assert!(symbol.starts_with('H'));
        assert!(symbol.contains('\u{fffd}'));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let data = b"\x00He-4 2+\xf0\x9f\x8e\x89";
        assert_eq!(decode_round_inputs(data), decode_round_inputs(data));
    }

    #[test]
    fn test_round_with_valid_element_reaches_the_integer_lookup() {
        // "H" passes atomic_number, then element_name(0) is the round's
        // expected error; particle_mass is skipped by the group boundary.
        let err = lookup_round(b"H").unwrap_err();
        assert!(matches!(err, ParticleError::InvalidParticle { .. }));
    }

    #[test]
    fn test_round_with_garbage_fails_on_the_first_lookup() {
        let err = lookup_round(b"!!!").unwrap_err();
        assert!(matches!(err, ParticleError::InvalidParticle { .. }));
    }

    #[test]
    fn test_run_lookups_full_success_path() {
        // A valid symbol and a valid atomic number complete the whole round.
        assert_eq!(run_lookups("H", 1), Ok(()));
        assert_eq!(run_lookups("He-4 2+", 118), Ok(()));
    }

    #[test]
    fn test_run_lookups_missing_mass_is_expected() {
        assert!(matches!(
            run_lookups("Tc", 43),
            Err(ParticleError::MissingData { .. })
        ));
    }
}
