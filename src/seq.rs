//! sequence retrieval boundary

use crate::error::SigError;
use rust_htslib::faidx;

/// supplies the nucleotide sequence of a named interval
///
/// coordinates are 0-based and inclusive on both ends, following
/// faidx. Anything that cannot be retrieved is
/// SequenceUnavailable: nothing downstream can run without the
/// window.
pub trait SequenceSource {
    fn fetch(&self, contig: &str, start: i64, end: i64) -> Result<Vec<u8>, SigError>;
}

/// indexed FASTA reference
pub struct FastaSource {
    reader: faidx::Reader,
}

impl FastaSource {
    pub fn from_path(reffn: &str) -> Result<FastaSource, SigError> {
        let reader = faidx::Reader::from_path(reffn)
            .map_err(|e| SigError::SequenceUnavailable(format!("can't open {}: {}", reffn, e)))?;
        return Ok(FastaSource { reader: reader });
    }
}

impl SequenceSource for FastaSource {
    fn fetch(&self, contig: &str, start: i64, end: i64) -> Result<Vec<u8>, SigError> {
        if start < 0 || end < start {
            return Err(SigError::SequenceUnavailable(format!(
                "bad interval {}:{}-{}",
                contig, start, end
            )));
        }
        let raw = self
            .reader
            .fetch_seq(contig, start as usize, end as usize)
            .map_err(|e| {
                SigError::SequenceUnavailable(format!("{}:{}-{}: {}", contig, start, end, e))
            })?;
        let seq = raw.to_ascii_uppercase();
        // Free up memory
        // see the discussion at
        // https://github.com/rust-bio/rust-htslib/issues/401
        unsafe { libc::free(raw.as_ptr() as *mut std::ffi::c_void) };
        if seq.is_empty() {
            return Err(SigError::SequenceUnavailable(format!(
                "empty sequence for {}:{}-{}",
                contig, start, end
            )));
        }
        return Ok(seq);
    }
}
