//! motif scanner boundary
//!
//! the core only needs a per-sequence match count. The built-in
//! engine runs a regular expression in process; the external
//! adapter keeps the legacy flow of writing a FASTA batch and
//! running a pattern tool over it.

use crate::error::SigError;
use regex::bytes::RegexBuilder;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::process::Command;

/// a configured pattern engine
///
/// deterministic for a given sequence; reports 0 when nothing
/// matches. Overlap policy belongs to the engine, not to this
/// trait.
pub trait MotifScanner {
    /// number of motif matches in one sequence
    fn count(&self, seq: &[u8]) -> Result<u64, SigError>;

    /// counts for a batch of sequences, in input order
    fn count_batch(&self, seqs: &[Vec<u8>]) -> Result<Vec<u64>, SigError> {
        let mut out: Vec<u64> = Vec::with_capacity(seqs.len());
        for s in seqs {
            out.push(self.count(s)?);
        }
        return Ok(out);
    }
}

/// in-process engine over the regex crate
///
/// matches are the engine's non-overlapping leftmost matches.
/// Matching is case-insensitive; the pattern string itself is not
/// rewritten.
pub struct RegexScanner {
    re: regex::bytes::Regex,
}

impl RegexScanner {
    pub fn new(pattern: &str) -> Result<RegexScanner, SigError> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| SigError::ScannerError(format!("bad pattern {}: {}", pattern, e)))?;
        return Ok(RegexScanner { re: re });
    }
}

impl MotifScanner for RegexScanner {
    fn count(&self, seq: &[u8]) -> Result<u64, SigError> {
        return Ok(self.re.find_iter(seq).count() as u64);
    }
}

/// adapter around an external pattern tool
///
/// every batch is written as FASTA records >s0..>sN-1 to one file
/// in `workdir`, the tool is run as CMD [args...] <pattern>
/// <fasta> (the pattern string is handed over unmodified) and its
/// stdout is read as a row-oriented report: one tab-separated row
/// per match, first column the record id, '#' lines skipped. The
/// remaining report columns (start, end, window id, analytic
/// p-value, strand, matched text, background histogram) are owned
/// by the tool and ignored here.
pub struct ExternalScanner {
    pub cmd: String,
    pub args: Vec<String>,
    pub pattern: String,
    pub workdir: String,
}

impl ExternalScanner {
    pub fn new(
        cmd: &str,
        args: &[String],
        pattern: &str,
        workdir: &str,
    ) -> Result<ExternalScanner, SigError> {
        fs::create_dir_all(workdir)
            .map_err(|e| SigError::ScannerError(format!("can't create {}: {}", workdir, e)))?;
        return Ok(ExternalScanner {
            cmd: cmd.to_string(),
            args: args.to_vec(),
            pattern: pattern.to_string(),
            workdir: workdir.to_string(),
        });
    }

    fn write_fasta(&self, seqs: &[Vec<u8>]) -> Result<String, SigError> {
        let fastafn = format!("{}/null-seqs.fa", self.workdir);
        let outfile = File::create(&fastafn)
            .map_err(|e| SigError::ScannerError(format!("can't create {}: {}", fastafn, e)))?;
        let mut handle = BufWriter::new(outfile);
        for (i, s) in seqs.iter().enumerate() {
            let rec = write!(handle, ">s{}\n", i)
                .and_then(|_| handle.write_all(s))
                .and_then(|_| handle.write_all(b"\n"));
            rec.map_err(|e| SigError::ScannerError(format!("can't write {}: {}", fastafn, e)))?;
        }
        return Ok(fastafn);
    }
}

impl MotifScanner for ExternalScanner {
    fn count(&self, seq: &[u8]) -> Result<u64, SigError> {
        let batch = vec![seq.to_vec()];
        let counts = self.count_batch(&batch)?;
        return Ok(counts[0]);
    }

    fn count_batch(&self, seqs: &[Vec<u8>]) -> Result<Vec<u64>, SigError> {
        let fastafn = self.write_fasta(seqs)?;
        let output = Command::new(&self.cmd)
            .args(&self.args)
            .arg(&self.pattern)
            .arg(&fastafn)
            .output()
            .map_err(|e| SigError::ScannerError(format!("can't run {}: {}", self.cmd, e)))?;
        if !output.status.success() {
            return Err(SigError::ScannerError(format!(
                "{} exited with {} [{}]",
                self.cmd,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        return parse_report(&output.stdout, seqs.len());
    }
}

/// tally report rows into per-record match counts
///
/// records without any row stay at 0; zero-match trials are kept,
/// never dropped.
pub fn parse_report(report: &[u8], n: usize) -> Result<Vec<u64>, SigError> {
    let mut counts: Vec<u64> = vec![0; n];
    for raw in report.split(|b| *b == b'\n') {
        if raw.is_empty() || raw[0] == b'#' {
            continue;
        }
        let line = String::from_utf8_lossy(raw);
        let id = match line.split('\t').next() {
            Some(f) => f.trim().to_string(),
            None => continue,
        };
        let idx = id
            .strip_prefix('s')
            .and_then(|d| d.parse::<usize>().ok())
            .filter(|i| *i < n);
        match idx {
            Some(i) => counts[i] += 1,
            None => {
                return Err(SigError::ScannerError(format!(
                    "malformed report row [{}]",
                    line.trim_end()
                )))
            }
        }
    }
    return Ok(counts);
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn regex_scanner_counts() {
        let sc = RegexScanner::new("G{4,}").unwrap();
        assert!(sc.count(b"TTGGGGTTGGGGGTT").unwrap() == 2);
        assert!(sc.count(b"ttggggtt").unwrap() == 1);
        assert!(sc.count(b"TTTTTT").unwrap() == 0);
    }

    #[test]
    fn regex_scanner_rejects_bad_pattern() {
        assert!(RegexScanner::new("(G").is_err());
    }

    #[test]
    fn parse_report_tallies_per_record() {
        let report = b"#comment\ns0\t10\t14\tw0\t0.001\t+\tGGGG\t.\ns2\t3\t7\tw0\t0.01\t+\tGGGG\t.\ns0\t20\t24\tw0\t0.001\t-\tGGGG\t.\n";
        let counts = parse_report(report, 3).unwrap();
        assert!(counts == vec![2, 0, 1]);
    }

    #[test]
    fn parse_report_rejects_unknown_record() {
        assert!(parse_report(b"s9\t1\t2\n", 3).is_err());
        assert!(parse_report(b"garbage\t1\t2\n", 3).is_err());
    }

    #[test]
    fn external_scanner_runs_tool() {
        let sc = ExternalScanner::new(
            "/bin/sh",
            &[
                "-c".to_string(),
                "printf 's0\\t1\\t5\\tw0\\t0.01\\t+\\tGGGG\\t.\\ns0\\t9\\t13\\tw0\\t0.01\\t+\\tGGGG\\t.\\n'".to_string(),
            ],
            "G{4,}",
            "/tmp/motsig-test-scanner",
        )
        .unwrap();
        let counts = sc.count_batch(&[b"GGGGAAAAGGGG".to_vec(), b"AAAA".to_vec()]).unwrap();
        assert!(counts == vec![2, 0]);
    }

    #[test]
    fn external_scanner_reports_missing_tool() {
        let sc =
            ExternalScanner::new("/no/such/tool", &[], "G", "/tmp/motsig-test-no-tool").unwrap();
        assert!(sc.count(b"ACGT").is_err());
    }
}
