//! null distribution of match counts

use crate::error::SigError;
use crate::profile::Profile;
use crate::scanner::MotifScanner;
use crate::sim;
use crate::sim::Sampling;
use fastrand::Rng;

/// per-trial match counts, one entry per trial, in trial order
///
/// built once per run and read-only afterwards. Zero-match trials
/// are stored like any other entry.
pub struct NullDistribution {
    pub counts: Vec<u64>,
}

impl NullDistribution {
    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    /// counts sorted ascending, for quantile lookups
    pub fn sorted(&self) -> Vec<u64> {
        let mut v = self.counts.to_vec();
        v.sort_unstable();
        return v;
    }
}

/// sequences per scanner invocation
///
/// the external adapter pays one process spawn per batch, so
/// trials are scanned in slabs; only one slab of sequences is
/// alive at a time. The RNG advances one trial at a time in trial
/// order, so the result does not depend on the batch size.
const BATCH: usize = 1000;

/// run `trials` null trials and collect their match counts
///
/// each trial: generate one sequence of `length` symbols from
/// `profile`, scan it, record the count. Any scanner failure
/// aborts the build; a partial distribution is never returned.
pub fn build(
    profile: &Profile,
    length: usize,
    trials: usize,
    scanner: &dyn MotifScanner,
    sampling: &Sampling,
    rng: &mut Rng,
) -> Result<NullDistribution, SigError> {
    let mut counts: Vec<u64> = Vec::with_capacity(trials);
    let mut done: usize = 0;
    while done < trials {
        let n = usize::min(BATCH, trials - done);
        let mut seqs: Vec<Vec<u8>> = Vec::with_capacity(n);
        for _ in 0..n {
            seqs.push(sim::generate(profile, length, sampling, rng)?);
        }
        let batch = match scanner.count_batch(&seqs) {
            Ok(b) => b,
            Err(e) => {
                return Err(SigError::ScannerError(format!(
                    "at trial {} of {}: {}",
                    done + 1,
                    trials,
                    e
                )))
            }
        };
        counts.extend_from_slice(&batch);
        done += n;
        if 0 == done % 10000 {
            eprintln!("{}/{} trials", done, trials);
        }
    }
    return Ok(NullDistribution { counts: counts });
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::profile::profile_of_seq;
    use crate::scanner::RegexScanner;

    fn gc_profile() -> Profile {
        // {G:0.6, C:0.2, T:0.1, A:0.1}
        return profile_of_seq(b"GGGGGGCCTA").unwrap();
    }

    #[test]
    fn build_returns_one_count_per_trial() {
        let sc = RegexScanner::new("G{4,}").unwrap();
        let mut rng = Rng::with_seed(5);
        let d = build(&gc_profile(), 200, 2500, &sc, &Sampling::Replacement, &mut rng).unwrap();
        assert!(d.len() == 2500);
    }

    #[test]
    fn build_accepts_single_trial() {
        let sc = RegexScanner::new("G{4,}").unwrap();
        let mut rng = Rng::with_seed(5);
        let d = build(&gc_profile(), 50, 1, &sc, &Sampling::Replacement, &mut rng).unwrap();
        assert!(d.len() == 1);
    }

    #[test]
    fn build_is_seed_deterministic() {
        let sc = RegexScanner::new("G{4,}").unwrap();
        let mut r1 = Rng::with_seed(17);
        let mut r2 = Rng::with_seed(17);
        let d1 = build(&gc_profile(), 100, 1500, &sc, &Sampling::Replacement, &mut r1).unwrap();
        let d2 = build(&gc_profile(), 100, 1500, &sc, &Sampling::Replacement, &mut r2).unwrap();
        assert!(d1.counts == d2.counts);
    }

    #[test]
    fn build_keeps_zero_match_trials() {
        // pattern that can never match keeps every trial at 0
        let sc = RegexScanner::new("N{5}").unwrap();
        let mut rng = Rng::with_seed(5);
        let d = build(&gc_profile(), 60, 300, &sc, &Sampling::Replacement, &mut rng).unwrap();
        let zeros = d.counts.iter().filter(|c| **c == 0).count();
        let nonzeros = d.counts.iter().filter(|c| **c > 0).count();
        assert!(zeros == 300);
        assert!(zeros + nonzeros == d.len());
    }

    #[test]
    fn build_rejects_empty_profile() {
        let sc = RegexScanner::new("G").unwrap();
        let mut rng = Rng::with_seed(5);
        let p = Profile {
            counts: fxhash::FxHashMap::default(),
            total: 0,
        };
        assert!(build(&p, 10, 10, &sc, &Sampling::Replacement, &mut rng).is_err());
    }
}
