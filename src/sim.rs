//! null sequence generation
//!
//! one randomized sequence per trial, matching the composition of
//! the observed window. Two strategies: independent weighted draws
//! (expected composition only) or a shuffle of the exact multiset.

use crate::error::SigError;
use crate::profile::Profile;
use fastrand::Rng;

/// how a null sequence relates to the window composition
///
/// Replacement draws every position independently, so per-symbol
/// counts match the window only in expectation. Permutation keeps
/// the exact counts and only reorders. Replacement is the
/// default; see DESIGN.md.
#[derive(PartialEq)]
pub enum Sampling {
    Replacement,
    Permutation,
}

/// generate one null sequence of `length` symbols
///
/// draws come from the symbols recorded in `profile`, weighted by
/// their counts. Permutation requires length == profile.total,
/// since a strict reordering of a differently-sized multiset does
/// not exist.
pub fn generate(
    profile: &Profile,
    length: usize,
    sampling: &Sampling,
    rng: &mut Rng,
) -> Result<Vec<u8>, SigError> {
    let syms = profile.symbols();
    if syms.is_empty() || 0 == profile.total {
        return Err(SigError::InvalidProfile("no symbols to sample".to_string()));
    }
    match sampling {
        Sampling::Replacement => {
            let mut seq: Vec<u8> = Vec::with_capacity(length);
            for _ in 0..length {
                let mut t = rng.u64(0..profile.total);
                for (sym, c) in &syms {
                    if t < *c {
                        seq.push(*sym);
                        break;
                    }
                    t -= c;
                }
            }
            return Ok(seq);
        }
        Sampling::Permutation => {
            if length as u64 != profile.total {
                return Err(SigError::InvalidProfile(format!(
                    "permutation sampling needs length == window length ({} != {})",
                    length, profile.total
                )));
            }
            let mut seq: Vec<u8> = Vec::with_capacity(length);
            for (sym, c) in &syms {
                for _ in 0..*c {
                    seq.push(*sym);
                }
            }
            rng.shuffle(&mut seq);
            return Ok(seq);
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::profile::profile_of_seq;

    #[test]
    fn generate_has_requested_length() {
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let mut rng = Rng::with_seed(7);
        let s = generate(&p, 1000, &Sampling::Replacement, &mut rng).unwrap();
        assert!(s.len() == 1000);
        let s = generate(&p, 10, &Sampling::Permutation, &mut rng).unwrap();
        assert!(s.len() == 10);
    }

    #[test]
    fn generate_emits_only_profiled_symbols() {
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let mut rng = Rng::with_seed(11);
        let s = generate(&p, 500, &Sampling::Replacement, &mut rng).unwrap();
        assert!(s.iter().all(|b| b"ACGT".contains(b)));
    }

    #[test]
    fn permutation_preserves_counts() {
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let mut rng = Rng::with_seed(3);
        let s = generate(&p, 10, &Sampling::Permutation, &mut rng).unwrap();
        let q = profile_of_seq(&s).unwrap();
        assert!(q.counts[&b'G'] == 6);
        assert!(q.counts[&b'C'] == 2);
        assert!(q.counts[&b'T'] == 1);
        assert!(q.counts[&b'A'] == 1);
    }

    #[test]
    fn permutation_rejects_other_lengths() {
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let mut rng = Rng::with_seed(3);
        assert!(generate(&p, 11, &Sampling::Permutation, &mut rng).is_err());
    }

    #[test]
    fn generate_is_seed_deterministic() {
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let mut r1 = Rng::with_seed(99);
        let mut r2 = Rng::with_seed(99);
        let s1 = generate(&p, 200, &Sampling::Replacement, &mut r1).unwrap();
        let s2 = generate(&p, 200, &Sampling::Replacement, &mut r2).unwrap();
        assert!(s1 == s2);
    }
}
