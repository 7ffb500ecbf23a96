//! Distance matrix input.
//!
//! The problem file is plain text: one matrix row per line, entries
//! separated by commas, `.` as decimal separator, no header.
//!
//! ```text
//! 0,1,2
//! 1,0,3
//! 2,3,0
//! ```

use crate::error::{TspPsoError, TspPsoResult};
use std::path::Path;

/// Square matrix of edge costs between `n` cities, stored row-major.
///
/// Construction validates shape and values, so every accessor may assume
/// an `n × n` matrix of finite numbers with `n >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, checking that it is square and non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_pso::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(m.dimension(), 2);
    /// assert_eq!(m.get(0, 1), 1.0);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspPsoResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspPsoError::EmptyMatrix);
        }

        let columns = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(TspPsoError::RaggedRow {
                    line: i + 1,
                    expected: columns,
                    found: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|d| !d.is_finite()) {
                return Err(TspPsoError::NonFinite {
                    row: i,
                    column: j,
                    value: row[j],
                });
            }
        }
        if columns != n {
            return Err(TspPsoError::NotSquare { rows: n, columns });
        }

        Ok(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Parses the comma-separated text format.
    ///
    /// Blank lines are skipped; whitespace around entries is ignored.
    /// Line numbers in errors refer to the physical line in `content`.
    pub fn parse(content: &str) -> TspPsoResult<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .split(',')
                .enumerate()
                .map(|(col, token)| {
                    let token = token.trim();
                    match token.parse::<f64>() {
                        Ok(d) if d.is_finite() => Ok(d),
                        _ => Err(TspPsoError::Parse {
                            line: line_num + 1,
                            column: col + 1,
                            token: token.to_string(),
                        }),
                    }
                })
                .collect::<TspPsoResult<Vec<f64>>>()?;

            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(TspPsoError::RaggedRow {
                        line: line_num + 1,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Reads and parses a problem file.
    pub fn load(path: impl AsRef<Path>) -> TspPsoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TspPsoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Number of cities.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Cost of travelling from city `from` to city `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.n && to < self.n,
            "city index out of range: ({from}, {to}) for dimension {}",
            self.n
        );
        self.data[from * self.n + to]
    }
}
