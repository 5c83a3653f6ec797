//! count motif matches in one genomic window
//!
//! standalone check of the scanner boundary: fetch the window,
//! run the configured engine once, print the count.

use crate::error::SigError;
use crate::scanner::ExternalScanner;
use crate::scanner::MotifScanner;
use crate::scanner::RegexScanner;
use crate::seq::FastaSource;
use crate::seq::SequenceSource;
use crate::utils;

pub fn scan(args: &[String]) {
    let usage = "usage: scan [OPTIONS] <reference> <pattern>
<reference>      indexed FASTA reference
<pattern>        motif specification, passed unmodified to the scanner
OPTIONS:
--region         <CONTIG:START-END>
                 window to scan (required)
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
    if args.len() - i != 2 || "" == region {
        eprintln!("{}", usage);
        return;
    }
    let (reffn, pattern) = (&args[i], &args[i + 1]);
    let res = run(reffn, pattern, region, scanner_cmd, &scanner_args, workdir);
    if let Err(e) = res {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(
    reffn: &str,
    pattern: &str,
    region: &str,
    scanner_cmd: &str,
    scanner_args: &[String],
    workdir: &str,
) -> Result<(), SigError> {
    let (contig, start, end) = utils::parse_region(region);
    let src = FastaSource::from_path(reffn)?;
    let seq = src.fetch(contig, start, end)?;
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
    let count = scanner.count(&seq)?;
    println!("{}\t{}\t{}\t{}", contig, start, end, count);
    return Ok(());
}
