use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::TriangleError;

/// A triangle entry annotated with the cheapest way to reach it from the apex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    value: i32,
    aggregate: i64,
    parent: Option<usize>,
}

impl Node {
    /// Builds the node at `index` of the row following `previous_row`
    /// (`None` for the apex).
    ///
    /// Interior nodes take whichever of their two parents has the strictly
    /// smaller aggregate, the left one on a tie. Choosing locally is enough
    /// because every aggregate in the row above is already final: edges only
    /// run from row `r` to columns `c` and `c + 1` of row `r + 1`.
    fn create(index: usize, value: i32, previous_row: Option<&[Node]>) -> Self {
        let Some(previous_row) = previous_row else {
            return Self {
                value,
                aggregate: value.into(),
                parent: None,
            };
        };

        let parent = if index == 0 {
            0
        } else if index == previous_row.len() {
            index - 1
        } else if previous_row[index].aggregate < previous_row[index - 1].aggregate {
            index
        } else {
            index - 1
        };

        Self {
            value,
            aggregate: previous_row[parent].aggregate + i64::from(value),
            parent: Some(parent),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn aggregate(&self) -> i64 {
        self.aggregate
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Rows of annotated nodes; row `r` always holds `r + 1` of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangle {
    rows: Vec<Vec<Node>>,
}

impl Triangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, row: usize) -> Option<&[Node]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn node(&self, row: usize, col: usize) -> Option<&Node> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn last_row(&self) -> Option<&[Node]> {
        self.rows.last().map(Vec::as_slice)
    }

    fn expected_len(&self) -> usize {
        self.rows.len() + 1
    }

    /// Appends the next row. Nothing is appended when the length is wrong.
    pub fn push_row(&mut self, values: &[i32]) -> Result<(), TriangleError> {
        let row = self.rows.len();
        let expected = self.expected_len();
        let found = values.len();

        if found < expected {
            return Err(TriangleError::RowTooShort {
                row,
                expected,
                found,
            });
        }
        if found > expected {
            return Err(TriangleError::RowTooLong {
                row,
                expected,
                found,
            });
        }

        let nodes = {
            let previous_row = self.last_row();
            values
                .iter()
                .enumerate()
                .map(|(index, &value)| Node::create(index, value, previous_row))
                .inspect(|node| trace!(row, ?node, "node created"))
                .collect::<Vec<_>>()
        };

        debug!(
            row,
            best = ?nodes.iter().map(Node::aggregate).min(),
            "row appended"
        );
        self.rows.push(nodes);

        Ok(())
    }

    /// Parses a text row and appends it. Tokens are checked before the row
    /// length, so `1 a` on row 0 reports the bad token rather than the length.
    pub fn push_line(&mut self, line: &str) -> Result<(), TriangleError> {
        let row = self.rows.len();
        let values = util::tokens(line)
            .into_iter()
            .map(|token| {
                util::number::<i32>(token).map_err(|_| TriangleError::NonIntegerToken {
                    row,
                    column: token.get_utf8_column(),
                    token: token.fragment().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.push_row(&values)
    }

    /// Like [`Triangle::push_line`] for a raw line without its `\n`. A line
    /// that is not UTF-8 cannot hold an integer where the bad bytes are, so
    /// the blank-delimited word around them is reported as a non-integer.
    pub fn push_bytes(&mut self, line: &[u8]) -> Result<(), TriangleError> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let err = match std::str::from_utf8(line) {
            Ok(text) => return self.push_line(text),
            Err(err) => err,
        };

        let is_blank = |b: &u8| matches!(b, b' ' | b'\t');
        let (valid, rest) = line.split_at(err.valid_up_to());
        let start = valid.iter().rposition(is_blank).map_or(0, |i| i + 1);
        let end = rest
            .iter()
            .position(is_blank)
            .map_or(line.len(), |i| valid.len() + i);

        Err(TriangleError::NonIntegerToken {
            row: self.rows.len(),
            column: String::from_utf8_lossy(&line[..start]).chars().count() + 1,
            token: String::from_utf8_lossy(&line[start..end]).into_owned(),
        })
    }

    /// Builds a triangle from fallible raw lines, stopping at the first
    /// failure of either the source or the triangle itself.
    pub fn try_from_raw_lines<S, E0, E>(
        lines: impl IntoIterator<Item = Result<S, E0>>,
    ) -> Result<Self, E>
    where
        S: AsRef<[u8]>,
        E: From<E0> + From<TriangleError>,
    {
        let mut triangle = Self::new();
        for line in lines {
            triangle.push_bytes(line?.as_ref())?;
        }
        Ok(triangle)
    }

    pub fn from_lines<S: AsRef<str>>(
        lines: impl IntoIterator<Item = S>,
    ) -> Result<Self, TriangleError> {
        let mut triangle = Self::new();
        for line in lines {
            triangle.push_line(line.as_ref())?;
        }
        Ok(triangle)
    }
}

impl FromStr for Triangle {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}
