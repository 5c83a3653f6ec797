extern crate motsig;
use motsig::commands;
use std::env;

const BUILD_TIME : &str = include!(concat!(env!("OUT_DIR"), "/timestamp.txt"));
const VERSION: &str = env!("CARGO_PKG_VERSION");


fn main() {
    eprintln!("== motsig ==");
    eprintln!("version:{}", VERSION);
    let commit = option_env!("COMMIT").unwrap_or("not defined");
    eprintln!("This binary was built from commit:[{}]", commit);
    eprintln!("compiled on {}", BUILD_TIME);
    let usage =   "\nusage: motsig COMMAND
where COMMAND can be:

sig          estimate the empirical p-value of an observed motif-match
             count against a Monte-Carlo null distribution
scan         count motif matches in one genomic window
profile      print the symbol composition of a genomic window
";
    let args:Vec<String> = env::args().collect();
    if (1 == args.len()) || (args[1] == "-h") || (args[1] == "--help")  {
	eprintln!("{}", usage);
	return;
    }
    if "sig" == args[1] {
	commands::sig::sig(&args.get(2..).unwrap());
	return
    }
    if "scan" == args[1] {
	commands::scan::scan(&args.get(2..).unwrap());
	return
    }
    if "profile" == args[1] {
	commands::profile::profile(&args.get(2..).unwrap());
	return
    }
    eprintln!("don't recognize:{}", args[1]);
    eprintln!("{}", usage);
}
