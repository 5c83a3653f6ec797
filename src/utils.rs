use std::io::BufWriter;
use std::io::Write;

pub fn write_out<W: std::io::Write>(handle: &mut BufWriter<W>, s: &str) {
    handle.write_all(s.as_bytes()).unwrap();
}

/// parse chr[:start-end] into a triplet
pub fn parse_region(region: &str) -> (&str, i64, i64) {
    let fields: Vec<&str> = region.split(":").collect();
    let contig = &fields[0];
    if 1 == fields.len() {
        return (contig, 0, i64::MAX);
    }
    let fields: Vec<&str> = fields[1].split("-").collect();
    let start = fields[0].parse::<i64>().unwrap();
    let end = fields[1].parse::<i64>().unwrap();
    return (contig, start, end);
}

/// parse an ascending comma list of probabilities in [0,1]
///
/// returns None on anything malformed; the caller prints usage.
pub fn parse_levels(s: &str) -> Option<Vec<f32>> {
    let mut levels: Vec<f32> = vec![];
    let mut last = -1.0f32;
    for tok in s.split(',') {
        let p = match tok.trim().parse::<f32>() {
            Ok(p) => p,
            Err(_) => return None,
        };
        if p < 0.0 || p > 1.0 || p <= last {
            return None;
        }
        levels.push(p);
        last = p;
    }
    if levels.is_empty() {
        return None;
    }
    return Some(levels);
}

#[test]
fn parse_region_test() {
    let (contig, start, end) = parse_region("chr12:4500000-4501000");
    assert!(contig == "chr12" && start == 4500000 && end == 4501000);
    let (contig, start, end) = parse_region("chrX");
    assert!(contig == "chrX" && start == 0 && end == i64::MAX);
}

#[test]
fn parse_levels_test() {
    let levels = parse_levels("0.95,0.99,0.999").unwrap();
    assert!(levels.len() == 3);
    assert!(f32::abs(levels[2] - 0.999) < 1e-6);
    // must be ascending and within [0,1]
    assert!(parse_levels("0.99,0.95").is_none());
    assert!(parse_levels("0.5,1.5").is_none());
    assert!(parse_levels("").is_none());
    assert!(parse_levels("abc").is_none());
}
