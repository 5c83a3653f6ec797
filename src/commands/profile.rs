//! print the symbol composition of a genomic window

use crate::error::SigError;
use crate::profile;
use crate::seq::FastaSource;
use crate::seq::SequenceSource;
use crate::utils;

use std::io;
use std::io::BufWriter;

pub fn profile(args: &[String]) {
    let usage = "usage: profile [OPTIONS] <reference>
<reference>      indexed FASTA reference
OPTIONS:
--region         <CONTIG:START-END>
                 window to profile (required)
";
    if (args.len() < 1) || (args[0] == "-h") || (args[0] == "--help") {
        eprintln!("{}", usage);
        return;
    }
    let mut region: &str = "";
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
        break;
    }
    if args.len() - i != 1 || "" == region {
        eprintln!("{}", usage);
        return;
    }
    let reffn = &args[i];
    if let Err(e) = run(reffn, region) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(reffn: &str, region: &str) -> Result<(), SigError> {
    let (contig, start, end) = utils::parse_region(region);
    let src = FastaSource::from_path(reffn)?;
    let seq = src.fetch(contig, start, end)?;
    let prof = profile::profile_of_seq(&seq)?;
    let mut handle = BufWriter::new(io::stdout());
    utils::write_out(&mut handle, &format!("#@REGION:{}:{}-{}\n", contig, start, end));
    utils::write_out(&mut handle, &format!("#@LENGTH:{}\n", prof.total));
    for (sym, c) in prof.symbols() {
        utils::write_out(
            &mut handle,
            &format!("{}\t{}\t{:.4}\n", sym as char, c, prof.freq(sym)),
        );
    }
    return Ok(());
}
