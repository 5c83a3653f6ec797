//! significance estimation on a null distribution

use crate::dist::NullDistribution;

/// empirical p-value of an observed match count
///
/// fraction of null trials whose count is >= observed (inclusive
/// upper tail). Floored at 1/trials: below that the sample has no
/// resolution, so 0 is never reported even when no trial reaches
/// the observed count. observed == 0 gives 1.
pub fn empirical_pval(dist: &NullDistribution, observed: u64) -> f32 {
    let n = dist.len();
    let mut hits: usize = 0;
    for c in &dist.counts {
        if *c >= observed {
            hits += 1;
        }
    }
    if 0 == hits {
        hits = 1;
    }
    return hits as f32 / n as f32;
}

/// empirical quantile at probability p, by linear interpolation
///
/// h = (n-1)p on the sorted counts, interpolating between the two
/// straddling entries (the usual "type 7" estimator).
pub fn quantile(sorted: &[u64], p: f32) -> f32 {
    let n = sorted.len();
    if 1 == n {
        return sorted[0] as f32;
    }
    let h = (n - 1) as f32 * p;
    let lo = h.floor() as usize;
    let hi = usize::min(lo + 1, n - 1);
    let frac = h - lo as f32;
    return sorted[lo] as f32 + frac * (sorted[hi] - sorted[lo]) as f32;
}

/// quantile lookup rows for a set of probability levels
///
/// rows are (1-p, quantile) so the table reads directly as
/// (analytic p-value, expected count) for manual comparison with
/// an externally computed p-value series. Levels must be
/// ascending, which makes the count column non-decreasing.
pub fn quantile_table(dist: &NullDistribution, levels: &[f32]) -> Vec<(f32, f32)> {
    let sorted = dist.sorted();
    let mut table: Vec<(f32, f32)> = Vec::with_capacity(levels.len());
    for p in levels {
        table.push((1.0 - p, quantile(&sorted, *p)));
    }
    return table;
}

/// default probability grid, 0.95 to 1.0 in steps of 0.0005
pub fn default_levels() -> Vec<f32> {
    let mut levels: Vec<f32> = Vec::with_capacity(101);
    for i in 0..=100 {
        levels.push(0.95 + 0.0005 * i as f32);
    }
    return levels;
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::dist;
    use crate::profile::profile_of_seq;
    use crate::scanner::RegexScanner;
    use crate::sim::Sampling;
    use fastrand::Rng;

    fn dist_of(counts: Vec<u64>) -> NullDistribution {
        return NullDistribution { counts: counts };
    }

    #[test]
    fn empirical_pval_is_inclusive_tail() {
        let d = dist_of(vec![0, 0, 1, 2, 5]);
        assert!(f32::abs(empirical_pval(&d, 1) - 3.0 / 5.0) < 1e-6);
        assert!(f32::abs(empirical_pval(&d, 5) - 1.0 / 5.0) < 1e-6);
    }

    #[test]
    fn empirical_pval_of_zero_is_one() {
        let d = dist_of(vec![0, 1, 0, 3]);
        assert!(empirical_pval(&d, 0) == 1.0);
    }

    #[test]
    fn empirical_pval_floors_at_one_trial() {
        let d = dist_of(vec![0, 0, 1, 2, 5]);
        // observed beyond every entry: 1/n, not 0
        assert!(f32::abs(empirical_pval(&d, 100) - 1.0 / 5.0) < 1e-6);
    }

    #[test]
    fn empirical_pval_is_nonincreasing_in_observed() {
        let d = dist_of(vec![0, 0, 0, 1, 1, 2, 3, 3, 4, 9]);
        let mut last = f32::MAX;
        for k in 0..12u64 {
            let p = empirical_pval(&d, k);
            assert!(p <= last);
            assert!(p >= 1.0 / 10.0 && p <= 1.0);
            last = p;
        }
    }

    #[test]
    fn quantile_interpolates() {
        let v: Vec<u64> = vec![0, 1, 2, 3, 4];
        assert!(quantile(&v, 0.0) == 0.0);
        assert!(quantile(&v, 1.0) == 4.0);
        assert!(f32::abs(quantile(&v, 0.5) - 2.0) < 1e-6);
        // h = 4*0.6 = 2.4 between 2 and 3
        assert!(f32::abs(quantile(&v, 0.6) - 2.4) < 1e-6);
        assert!(quantile(&[7], 0.3) == 7.0);
    }

    #[test]
    fn quantile_table_is_nondecreasing() {
        let d = dist_of(vec![4, 0, 0, 1, 0, 2, 0, 1, 0, 0, 3, 0]);
        let levels = default_levels();
        let table = quantile_table(&d, &levels);
        assert!(table.len() == levels.len());
        let mut last = f32::MIN;
        for (pv, q) in &table {
            assert!(*q >= last);
            assert!(*pv >= -1e-6 && *pv <= 0.05 + 1e-6);
            last = *q;
        }
        // last level is 1.0: the maximum of the distribution
        assert!(f32::abs(table[table.len() - 1].1 - 4.0) < 1e-5);
    }

    #[test]
    fn gc_rich_scenario() {
        // G-rich window, {G:0.6, C:0.2, T:0.1, A:0.1}, G-run motif
        let p = profile_of_seq(b"GGGGGGCCTA").unwrap();
        let sc = RegexScanner::new("G{8,}").unwrap();
        let mut rng = Rng::with_seed(1);
        let d = dist::build(&p, 300, 4000, &sc, &Sampling::Replacement, &mut rng).unwrap();
        assert!(d.len() == 4000);
        let pval = empirical_pval(&d, 3);
        assert!(pval >= 1.0 / 4000.0 && pval <= 1.0);
        // more extreme observation can only shrink the estimate
        assert!(empirical_pval(&d, 5) <= pval);
    }
}
