//! per-symbol composition of a sequence window

use crate::error::SigError;
use fxhash::FxHashMap;

/// symbol counts of exactly one sequence
///
/// counts holds one positive entry per symbol observed in the
/// input; symbols that never occur are absent (the generator only
/// ever samples from symbols that occur).
/// total == sum of counts == length of the profiled sequence.
pub struct Profile {
    pub counts: FxHashMap<u8, u64>,
    pub total: u64,
}

/// count symbol occurrences in `seq`
///
/// case-insensitive: bases are folded to uppercase before counting,
/// same as the window itself is handled downstream.
pub fn profile_of_seq(seq: &[u8]) -> Result<Profile, SigError> {
    if seq.is_empty() {
        return Err(SigError::InvalidProfile("empty sequence".to_string()));
    }
    let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
    for b in seq {
        *counts.entry(b.to_ascii_uppercase()).or_insert(0) += 1;
    }
    return Ok(Profile {
        counts: counts,
        total: seq.len() as u64,
    });
}

impl Profile {
    /// (symbol, count) pairs sorted by symbol
    ///
    /// hash order is not stable across runs; sampling iterates this
    /// sorted view so a fixed seed reproduces the same sequences.
    pub fn symbols(&self) -> Vec<(u8, u64)> {
        let mut v: Vec<(u8, u64)> = self.counts.iter().map(|(s, c)| (*s, *c)).collect();
        v.sort_by_key(|p| p.0);
        return v;
    }

    pub fn freq(&self, sym: u8) -> f32 {
        match self.counts.get(&sym) {
            Some(c) => *c as f32 / self.total as f32,
            None => 0.0,
        }
    }
}

#[test]
fn profile_of_seq_counts() {
    let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
    assert!(p.total == 10);
    assert!(p.counts[&b'G'] == 6);
    assert!(p.counts[&b'C'] == 2);
    assert!(p.counts[&b'T'] == 1);
    assert!(p.counts[&b'A'] == 1);
    assert!(p.counts.get(&b'N').is_none());
}

#[test]
fn profile_of_seq_case_folds() {
    let p = profile_of_seq(b"acgtACGT").unwrap();
    assert!(p.counts.len() == 4);
    assert!(p.counts[&b'A'] == 2);
    assert!(f32::abs(p.freq(b'A') - 0.25) < 1e-6);
}

#[test]
fn profile_of_seq_rejects_empty() {
    assert!(profile_of_seq(b"").is_err());
}

#[test]
fn symbols_are_sorted() {
    let p = profile_of_seq(b"TGCA").unwrap();
    let syms: Vec<u8> = p.symbols().iter().map(|p| p.0).collect();
    assert!(syms == vec![b'A', b'C', b'G', b'T']);
}
