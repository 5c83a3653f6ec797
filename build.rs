use chrono;
use std::env;
use std::fs;
use std::io::Write;

// record the build time so the binary can print it in its banner
fn main() {
    let outdir = env::var("OUT_DIR").unwrap();
    let outfile = format!("{}/timestamp.txt", outdir);
    let mut fh = fs::File::create(&outfile).unwrap();
    write!(fh, r#""{}""#, chrono::Local::now().to_rfc2822()).ok();
}
