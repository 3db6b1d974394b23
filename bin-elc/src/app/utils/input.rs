use std::str::FromStr;
use log::info;
use serde_json::Value;
use ela_matrix::Q;
use ela_matrix::dense::Mat;
use crate::app::err::*;

/// A matrix given inline or as a CSV file.
#[derive(Clone, Default, Debug, clap::Args)]
pub struct Input {
    /// Rows as JSON `[[1,2],[3,4]]` or as `"1 2; 3 4"`.
    pub matrix: Option<String>,

    /// Read the matrix from a CSV file instead.
    #[arg(short, long)]
    pub file: Option<String>,
}

impl Input {
    pub fn load(&self) -> Result<Mat<Q>, Box<dyn std::error::Error>> {
        match (&self.matrix, &self.file) {
            (Some(_), Some(_)) => err!("give either a matrix or `--file`, not both."),
            (Some(s), None)    => parse_matrix(s),
            (None, Some(path)) => load_csv(path),
            (None, None)       => err!("no matrix given.")
        }
    }
}

pub fn parse_scalar(s: &str) -> Result<Q, Box<dyn std::error::Error>> {
    let s = s.trim();
    match Q::from_str(s) {
        Ok(a) => Ok(a),
        Err(_) => err!("cannot parse '{s}' as a rational number. use e.g. 3, -2, 1/4, 0.5")
    }
}

// JSON numbers keep their source text, so `0.1` stays 1/10.
fn parse_value(v: &Value) -> Result<Q, Box<dyn std::error::Error>> {
    match v {
        Value::Number(n) => parse_scalar(&n.to_string()),
        Value::String(s) => parse_scalar(s),
        _ => err!("invalid entry: {v}")
    }
}

/// Entries separated by commas or whitespace, or a JSON array.
pub fn parse_vector(s: &str) -> Result<Vec<Q>, Box<dyn std::error::Error>> {
    if let Ok(entries) = serde_json::from_str::<Vec<Value>>(s) {
        return entries.iter().map(parse_value).collect()
    }

    let sep = regex::Regex::new(r"[,\s]+")?;
    let entries: Vec<_> = sep.split(s.trim()).filter(|e| !e.is_empty()).collect();

    ensure!(!entries.is_empty(), "empty vector: '{s}'");

    entries.into_iter().map(parse_scalar).collect()
}

/// Rows as a JSON array of arrays, or separated by `;`.
pub fn parse_matrix(s: &str) -> Result<Mat<Q>, Box<dyn std::error::Error>> {
    let rows = if let Ok(rows) = serde_json::from_str::<Vec<Vec<Value>>>(s) {
        rows.iter().map(|r|
            r.iter().map(parse_value).collect::<Result<Vec<_>, _>>()
        ).collect::<Result<Vec<_>, _>>()?
    } else {
        s.split(';').filter(|r| !r.trim().is_empty()).map(parse_vector).collect::<Result<Vec<_>, _>>()?
    };

    make_matrix(rows)
}

pub fn load_csv(path: &str) -> Result<Mat<Q>, Box<dyn std::error::Error>> {
    info!("load: {path}");

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = vec![];
    for record in rdr.records() {
        let record = record?;
        let row = record.iter().filter(|e| !e.is_empty()).map(parse_scalar).collect::<Result<Vec<_>, _>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }

    make_matrix(rows)
}

fn make_matrix(rows: Vec<Vec<Q>>) -> Result<Mat<Q>, Box<dyn std::error::Error>> {
    ensure!(!rows.is_empty(), "empty matrix.");
    ensure!(rows.iter().all(|r| !r.is_empty()), "empty row.");

    let a = Mat::from_rows(rows)?;
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ela_matrix::MatTrait;

    fn q(p: i32, r: i32) -> Q {
        Q::from(p) / Q::from(r)
    }

    #[test]
    fn scalar() {
        assert_eq!(parse_scalar("3").unwrap(), q(3, 1));
        assert_eq!(parse_scalar(" -1/4 ").unwrap(), q(-1, 4));
        assert_eq!(parse_scalar("0.5").unwrap(), q(1, 2));
        assert!(parse_scalar("1/0").is_err());
        assert!(parse_scalar("abc").is_err());
    }

    #[test]
    fn vector() {
        let v = vec![q(1, 1), q(-2, 1), q(3, 5)];
        assert_eq!(parse_vector("1, -2, 3/5").unwrap(), v);
        assert_eq!(parse_vector("1 -2   3/5").unwrap(), v);
        assert_eq!(parse_vector(r#"[1, -2, "3/5"]"#).unwrap(), v);
        assert!(parse_vector("  ").is_err());
    }

    #[test]
    fn matrix_json() {
        let a = parse_matrix("[[1, 2], [0.5, \"1/3\"]]").unwrap();
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a[(1, 0)], q(1, 2));
        assert_eq!(a[(1, 1)], q(1, 3));
    }

    #[test]
    fn matrix_json_exact() {
        let a = parse_matrix("[[0.1234567890123456789, 123456789012345678901234]]").unwrap();
        let b = parse_matrix("0.1234567890123456789 123456789012345678901234").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[(0, 0)].to_string(), "1234567890123456789/10000000000000000000");
        assert_eq!(a[(0, 1)].to_string(), "123456789012345678901234");

        let a = parse_matrix("[[1e2, 2.5E-1, -0.1]]").unwrap();
        assert_eq!(a.row(0), vec![q(100, 1), q(1, 4), q(-1, 10)]);
    }

    #[test]
    fn matrix_rows() {
        let a = parse_matrix("1 2, 3; 4 5 6;").unwrap();
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.row(1), vec![q(4, 1), q(5, 1), q(6, 1)]);
    }

    #[test]
    fn matrix_ragged() {
        let e = parse_matrix("1 2; 3").unwrap_err();
        assert_eq!(e.to_string(), "row 1 has 1 entries, expected 2.");
    }

    #[test]
    fn matrix_invalid() {
        assert!(parse_matrix("").is_err());
        assert!(parse_matrix("1 x; 2 3").is_err());
        assert!(parse_matrix("[[true]]").is_err());
    }

    #[test]
    fn input_source() {
        let input = Input { matrix: None, file: None };
        assert!(input.load().is_err());

        let input = Input { matrix: Some("1".into()), file: Some("a.csv".into()) };
        assert!(input.load().is_err());
    }

    #[test]
    fn csv_file() {
        let path = std::env::temp_dir().join("elc-input-csv-test.csv");
        std::fs::write(&path, "1, 2, 3\n4, 5/2, 0.5\n").unwrap();

        let a = load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a[(1, 1)], q(5, 2));
        assert_eq!(a[(1, 2)], q(1, 2));

        std::fs::remove_file(path).unwrap();
    }
}
