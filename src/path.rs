use std::fmt;
use std::iter;

use itertools::Itertools;

use crate::error::TriangleError;
use crate::triangle::{Node, Triangle};

/// The cheapest apex-to-base path: one value per row plus the column it was
/// taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumPath {
    values: Vec<i32>,
    columns: Vec<usize>,
    total: i64,
}

impl MinimumPath {
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for MinimumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Minimal path is: {} = {}",
            self.values.iter().join(" + "),
            self.total
        )
    }
}

impl Triangle {
    /// Picks the bottom node with the smallest aggregate (leftmost on ties)
    /// and follows parent links back up to the apex.
    pub fn minimum_path(&self) -> Result<MinimumPath, TriangleError> {
        let last_row = self.last_row().ok_or(TriangleError::EmptyTriangle)?;
        let bottom = self.rows() - 1;
        let end_column = last_row
            .iter()
            .position_min_by_key(|node| node.aggregate())
            .ok_or(TriangleError::EmptyTriangle)?;
        let end = &last_row[end_column];

        let mut steps = iter::successors(
            Some((bottom, end_column)),
            |&(row, column): &(usize, usize)| {
                let node = self.node(row, column)?;
                Some((row.checked_sub(1)?, node.parent()?))
            },
        )
        .filter_map(|(row, column)| self.node(row, column).map(|node| (column, node)))
        .collect::<Vec<(usize, &Node)>>();
        steps.reverse();

        debug_assert_eq!(steps.len(), self.rows());

        Ok(MinimumPath {
            values: steps.iter().map(|(_, node)| node.value()).collect(),
            columns: steps.iter().map(|(column, _)| *column).collect(),
            total: end.aggregate(),
        })
    }
}

/// Builds the triangle from `input` and extracts its minimum path.
pub fn minimal_path(
    input: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<MinimumPath, TriangleError> {
    Triangle::from_lines(input)?.minimum_path()
}
