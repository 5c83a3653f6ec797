extern crate motsig;
use motsig::dist;
use motsig::profile;
use motsig::scanner;
use motsig::sim;
use motsig::stats;
use std::io;
use std::time;

fn main() -> Result<(), io::Error> {
    // G-rich composition as in the reference window
    let p = profile::profile_of_seq(b"GGGGGGCCTA").unwrap();
    let sc = scanner::RegexScanner::new("G{8,}").unwrap();
    let mut pval: f32 = -1.0;
    let now = time::Instant::now();
    for _ in 0..20 {
	let mut rng = fastrand::Rng::with_seed(1);
	let d = dist::build(&p, 1000, 2000, &sc, &sim::Sampling::Replacement, &mut rng).unwrap();
	pval = stats::empirical_pval(&d, 2);
    }
    println!("{}\t{:.3}sec(s)", pval, now.elapsed().as_secs_f32());
    Ok(())
}
