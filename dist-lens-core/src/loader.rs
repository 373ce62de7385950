use dist_lens_common::{DistLensError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-file parse accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub path: PathBuf,
    pub parsed: usize,
    pub skipped: usize, // non-numeric or non-finite tokens
}

/// Expands a literal path or glob pattern into a sorted file list.
pub fn resolve_paths(input: &str) -> Result<Vec<PathBuf>> {
    let direct = Path::new(input);
    if direct.is_file() {
        return Ok(vec![direct.to_path_buf()]);
    }
    let mut out: Vec<PathBuf> = glob::glob(input)
        .map_err(|e| DistLensError::Pattern(e.to_string()))?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    out.sort();
    if out.is_empty() {
        return Err(DistLensError::Pattern(format!("no files match '{input}'")));
    }
    Ok(out)
}

fn parse_file(path: &Path) -> Result<(Vec<f64>, LoadReport)> {
    let content = std::fs::read_to_string(path)?;
    let mut values = Vec::new();
    let mut skipped = 0usize;
    // whitespace- or comma-separated, so plain single-column CSVs work too
    for token in content.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => skipped += 1,
        }
    }
    let report = LoadReport {
        path: path.to_path_buf(),
        parsed: values.len(),
        skipped,
    };
    Ok((values, report))
}

/// Parses every file in parallel and concatenates values in path order.
pub fn load_values(paths: &[PathBuf]) -> Result<(Vec<f64>, Vec<LoadReport>)> {
    let parsed: Vec<(Vec<f64>, LoadReport)> = paths
        .par_iter()
        .map(|p| parse_file(p))
        .collect::<Result<_>>()?;
    let mut values = Vec::new();
    let mut reports = Vec::with_capacity(parsed.len());
    for (v, r) in parsed {
        values.extend(v);
        reports.push(r);
    }
    Ok((values, reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(content: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp
    }

    #[test]
    fn parses_whitespace_and_comma_separated() {
        let tmp = fixture("1.5 2\n3,4.25\t5");
        let (values, reports) = load_values(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(values, vec![1.5, 2.0, 3.0, 4.25, 5.0]);
        assert_eq!(reports[0].parsed, 5);
        assert_eq!(reports[0].skipped, 0);
    }

    #[test]
    fn junk_and_nonfinite_tokens_are_skipped() {
        let tmp = fixture("1 abc 2 NaN inf 3");
        let (values, reports) = load_values(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(reports[0].skipped, 3);
    }

    #[test]
    fn resolve_rejects_unmatched_pattern() {
        let err = resolve_paths("/nonexistent/dir/*.txt").unwrap_err();
        assert!(matches!(err, DistLensError::Pattern(_)));
    }

    #[test]
    fn resolve_accepts_literal_file() {
        let tmp = fixture("1 2 3");
        let paths = resolve_paths(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(paths.len(), 1);
    }
}
