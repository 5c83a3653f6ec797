//! estimate the significance of an observed motif-match count
//!
//! fetch the window, profile its composition, run many null
//! trials through the scanner, then report the empirical p-value
//! of the observed count together with a quantile-vs-count table
//! for cross-checking an externally computed analytic p-value.

use crate::dist;
use crate::error::SigError;
use crate::profile;
use crate::scanner::ExternalScanner;
use crate::scanner::MotifScanner;
use crate::scanner::RegexScanner;
use crate::seq::FastaSource;
use crate::seq::SequenceSource;
use crate::sim::Sampling;
use crate::stats;
use crate::utils;

use std::io;
use std::io::BufWriter;
use std::time;

pub fn sig(args: &[String]) {
    let usage = "usage: sig [OPTIONS] <reference> <pattern>
<reference>      indexed FASTA reference
<pattern>        motif specification, passed unmodified to the scanner
                 (a regular expression for the built-in engine)
OPTIONS:
--region         <CONTIG:START-END>
                 window under study (required)
--trials         <N>
                 number of null trials (default=100000)
--seed           <u64>
                 seed for the random number generator (default=1)
--sampling       <replacement|permutation>
                 null sequence strategy (default=replacement)
--levels         <p1,p2,...>
                 ascending quantile probabilities in [0,1]
                 (default: 0.95 to 1.0 in steps of 0.0005)
--observed       <N>
                 observed match count; when absent the window
                 itself is scanned
--analytic-pval  <float>
                 externally computed p-value, echoed in the output
                 for manual comparison
--scanner-cmd    <CMD>
                 external scanner executable; without this the
                 built-in regex engine is used
--scanner-arg    <ARG>
                 extra argument for the external scanner
                 (can be given multiple times)
--workdir        <DIR>
                 scratch directory for the external scanner
                 (default=sig-tmp)
";
    if (args.len() < 2) || (args[0] == "-h") || (args[0] == "--help") {
        eprintln!("{}", usage);
        return;
    }
    let mut region: &str = "";
    let mut trials: usize = 100000;
    let mut seed: u64 = 1;
    let mut sampling = Sampling::Replacement;
    let mut levels: Vec<f32> = stats::default_levels();
    let mut observed: Option<u64> = None;
    let mut analytic: Option<f32> = None;
    let mut scanner_cmd: &str = "";
    let mut scanner_args: Vec<String> = vec![];
    let mut workdir: &str = "sig-tmp";
    let mut i: usize = 0;
    loop {
        if i >= args.len() {
            eprintln!("{}", usage);
            return;
        }
        if "--region" == args[i] {
            region = &args[i + 1];
            i = i + 2;
            continue;
        }
        if "--trials" == args[i] {
            trials = args[i + 1].parse().unwrap();
            i = i + 2;
            continue;
        }
        if "--seed" == args[i] {
            seed = args[i + 1].parse().unwrap();
            i = i + 2;
            continue;
        }
        if "--sampling" == args[i] {
            sampling = match args[i + 1].as_str() {
                "replacement" => Sampling::Replacement,
                "permutation" => Sampling::Permutation,
                other => {
                    eprintln!("unknown sampling:{}", other);
                    eprintln!("{}", usage);
                    return;
                }
            };
            i = i + 2;
            continue;
        }
        if "--levels" == args[i] {
            levels = match utils::parse_levels(&args[i + 1]) {
                Some(l) => l,
                None => {
                    eprintln!("bad levels:{}", args[i + 1]);
                    eprintln!("{}", usage);
                    return;
                }
            };
            i = i + 2;
            continue;
        }
        if "--observed" == args[i] {
            observed = Some(args[i + 1].parse().unwrap());
            i = i + 2;
            continue;
        }
        if "--analytic-pval" == args[i] {
            analytic = Some(args[i + 1].parse().unwrap());
            i = i + 2;
            continue;
        }
        if "--scanner-cmd" == args[i] {
            scanner_cmd = &args[i + 1];
            i = i + 2;
            continue;
        }
        if "--scanner-arg" == args[i] {
            scanner_args.push(args[i + 1].clone());
            i = i + 2;
            continue;
        }
        if "--workdir" == args[i] {
            workdir = &args[i + 1];
            i = i + 2;
            continue;
        }
        break;
    }
    if args.len() - i != 2 || "" == region || 0 == trials {
        eprintln!("{}", usage);
        return;
    }
    let (reffn, pattern) = (&args[i], &args[i + 1]);
    eprintln!("region:{}", region);
    eprintln!("pattern:{}", pattern);
    eprintln!("trials:{}", trials);
    let now = time::Instant::now();
    let res = run(
        reffn,
        pattern,
        region,
        trials,
        seed,
        &sampling,
        &levels,
        observed,
        analytic,
        scanner_cmd,
        &scanner_args,
        workdir,
    );
    if let Err(e) = res {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    let elapsed = now.elapsed();
    eprintln!("sig ran in {:.3}sec(s)", elapsed.as_secs_f32());
}

fn run(
    reffn: &str,
    pattern: &str,
    region: &str,
    trials: usize,
    seed: u64,
    sampling: &Sampling,
    levels: &[f32],
    observed: Option<u64>,
    analytic: Option<f32>,
    scanner_cmd: &str,
    scanner_args: &[String],
    workdir: &str,
) -> Result<(), SigError> {
    let (contig, start, end) = utils::parse_region(region);
    let src = FastaSource::from_path(reffn)?;
    let seq = src.fetch(contig, start, end)?;
    let prof = profile::profile_of_seq(&seq)?;
    let scanner: Box<dyn MotifScanner> = if "" == scanner_cmd {
        Box::new(RegexScanner::new(pattern)?)
    } else {
        Box::new(ExternalScanner::new(
            scanner_cmd,
            scanner_args,
            pattern,
            workdir,
        )?)
    };
    let observed = match observed {
        Some(k) => k,
        None => scanner.count(&seq)?,
    };
    let mut rng = fastrand::Rng::with_seed(seed);
    let d = dist::build(&prof, seq.len(), trials, scanner.as_ref(), sampling, &mut rng)?;
    let pval = stats::empirical_pval(&d, observed);
    let table = stats::quantile_table(&d, levels);
    let mut handle = BufWriter::new(io::stdout());
    utils::write_out(&mut handle, &format!("#@REGION:{}:{}-{}\n", contig, start, end));
    utils::write_out(&mut handle, &format!("#@LENGTH:{}\n", seq.len()));
    utils::write_out(&mut handle, &format!("#@PATTERN:{}\n", pattern));
    utils::write_out(&mut handle, &format!("#@TRIALS:{}\n", trials));
    utils::write_out(&mut handle, &format!("#@SEED:{}\n", seed));
    let strategy = match sampling {
        Sampling::Replacement => "replacement",
        Sampling::Permutation => "permutation",
    };
    utils::write_out(&mut handle, &format!("#@SAMPLING:{}\n", strategy));
    utils::write_out(&mut handle, &format!("#@OBSERVED:{}\n", observed));
    utils::write_out(&mut handle, &format!("#@EMPIRICAL_PVAL:{:.6}\n", pval));
    if let Some(a) = analytic {
        utils::write_out(&mut handle, &format!("#@ANALYTIC_PVAL:{:.6}\n", a));
    }
    utils::write_out(&mut handle, &format!("#pval\texpected_count\n"));
    for (pv, q) in &table {
        utils::write_out(&mut handle, &format!("{:.4}\t{:.2}\n", pv, q));
    }
    return Ok(());
}
