//! Levenshtein edit distance with an optimal character alignment.
//!
//! Insertions, deletions, and substitutions each cost one. The distance is
//! read from a dynamic-programming table, and one optimal alignment is
//! recovered by walking the table back from its bottom-right cell. When
//! several neighbours tie for the minimum the walk prefers the diagonal, then
//! the left cell, then the cell above, so the alignment reported for a given
//! pair of strings never varies.
//!
//! Strings are compared as sequences of Unicode scalar values.


use tracing::instrument;

/// Marker used for gaps when an alignment is rendered as text.
pub const GAP: char = ' ';

/// Edit-distance table for two character sequences.
///
/// Cell `(i, j)` holds the edit distance between the first `i` characters of
/// the source and the first `j` characters of the target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditDistanceTable {
    cells: Vec<usize>,
    columns: usize,
}

impl EditDistanceTable {
    /// Fills the `(source.len() + 1) x (target.len() + 1)` table.
    ///
    /// # Examples
    /// ```
    /// use algokit_core::EditDistanceTable;
    ///
    /// let source: Vec<char> = "ab".chars().collect();
    /// let target: Vec<char> = "b".chars().collect();
    /// let table = EditDistanceTable::build(&source, &target);
    /// assert_eq!(table.get(1, 1), Some(1));
    /// assert_eq!(table.distance(), 1);
    /// ```
    #[must_use]
    pub fn build(source: &[char], target: &[char]) -> Self {
        let columns = target.len() + 1;
        let mut cells = vec![0; (source.len() + 1) * columns];

        for (i, row) in cells.chunks_exact_mut(columns).enumerate() {
            row[0] = i;
        }
        for (j, cell) in cells.iter_mut().take(columns).enumerate() {
            *cell = j;
        }

        for (i, &left_char) in source.iter().enumerate() {
            for (j, &right_char) in target.iter().enumerate() {
                let diagonal = cells[i * columns + j];
                let value = if left_char == right_char {
                    diagonal
                } else {
                    let up = cells[i * columns + j + 1];
                    let left = cells[(i + 1) * columns + j];
                    1 + diagonal.min(up).min(left)
                };
                cells[(i + 1) * columns + j + 1] = value;
            }
        }

        Self { cells, columns }
    }

    /// Returns the number of rows (`source.len() + 1`).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Returns the number of columns (`target.len() + 1`).
    #[must_use]
    #[rustfmt::skip]
    pub fn columns(&self) -> usize { self.columns }

    /// Returns cell `(i, j)`, or `None` outside the table.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if j >= self.columns {
            return None;
        }
        self.cells.get(i * self.columns + j).copied()
    }

    /// Returns the edit distance between the full source and target.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.cells.last().copied().unwrap_or_default()
    }

    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.columns + j]
    }
}

/// One column of an alignment. `None` marks a gap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AlignmentColumn {
    /// Character taken from the source, if any.
    pub source: Option<char>,
    /// Character taken from the target, if any.
    pub target: Option<char>,
}

impl AlignmentColumn {
    /// Returns the edit operation this column realises.
    #[must_use]
    pub fn operation(&self) -> AlignmentOp {
        match (self.source, self.target) {
            (Some(left), Some(right)) if left == right => AlignmentOp::Match,
            (Some(_), Some(_)) => AlignmentOp::Substitute,
            (None, _) => AlignmentOp::Insert,
            (Some(_), None) => AlignmentOp::Delete,
        }
    }
}

/// Edit operation realised by an [`AlignmentColumn`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AlignmentOp {
    /// Equal characters aligned; costs nothing.
    Match,
    /// Different characters aligned.
    Substitute,
    /// A target character aligned with a gap in the source.
    Insert,
    /// A source character aligned with a gap in the target.
    Delete,
}

/// Number of columns per [`AlignmentOp`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OperationCounts {
    /// Columns aligning equal characters.
    pub matches: usize,
    /// Columns aligning different characters.
    pub substitutions: usize,
    /// Columns with a gap in the source.
    pub insertions: usize,
    /// Columns with a gap in the target.
    pub deletions: usize,
}

impl OperationCounts {
    /// Returns the cost of the edit script, i.e. every non-matching column.
    #[must_use]
    pub const fn edits(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }
}

/// An optimal alignment and the edit distance it realises.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alignment {
    distance: usize,
    columns: Vec<AlignmentColumn>,
}

impl Alignment {
    /// Returns the minimum edit distance.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> usize { self.distance }

    /// Returns the alignment columns from left to right.
    #[must_use]
    #[rustfmt::skip]
    pub fn columns(&self) -> &[AlignmentColumn] { &self.columns }

    /// Renders the source side with [`GAP`] in place of gaps.
    #[must_use]
    pub fn aligned_source(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.source.unwrap_or(GAP))
            .collect()
    }

    /// Renders the target side with [`GAP`] in place of gaps.
    #[must_use]
    pub fn aligned_target(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.target.unwrap_or(GAP))
            .collect()
    }

    /// Tallies the columns by operation.
    #[must_use]
    pub fn operation_counts(&self) -> OperationCounts {
        self.columns
            .iter()
            .fold(OperationCounts::default(), |mut counts, column| {
                match column.operation() {
                    AlignmentOp::Match => counts.matches += 1,
                    AlignmentOp::Substitute => counts.substitutions += 1,
                    AlignmentOp::Insert => counts.insertions += 1,
                    AlignmentOp::Delete => counts.deletions += 1,
                }
                counts
            })
    }
}

/// Computes the edit distance between `source` and `target` together with
/// one optimal alignment.
///
/// # Examples
/// ```
/// use algokit_core::align;
///
/// let alignment = align("kitten", "sitting");
/// assert_eq!(alignment.distance(), 3);
/// assert_eq!(alignment.aligned_source(), "kitten ");
/// assert_eq!(alignment.aligned_target(), "sitting");
/// ```
#[instrument(
    name = "edit_distance.align",
    skip(source, target),
    fields(source_len = tracing::field::Empty, target_len = tracing::field::Empty, distance = tracing::field::Empty),
)]
pub fn align(source: &str, target: &str) -> Alignment {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let span = tracing::Span::current();
    span.record("source_len", source.len());
    span.record("target_len", target.len());

    let table = EditDistanceTable::build(&source, &target);
    let columns = backtrace(&table, &source, &target);
    let distance = table.distance();
    span.record("distance", distance);

    Alignment { distance, columns }
}

/// Returns the edit distance between `source` and `target`.
///
/// # Examples
/// ```
/// assert_eq!(algokit_core::edit_distance("flaw", "lawn"), 2);
/// ```
#[must_use]
pub fn edit_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    EditDistanceTable::build(&source, &target).distance()
}

fn backtrace(table: &EditDistanceTable, source: &[char], target: &[char]) -> Vec<AlignmentColumn> {
    let mut i = source.len();
    let mut j = target.len();
    let mut columns = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let step = if i == 0 {
            Step::Left
        } else if j == 0 {
            Step::Up
        } else {
            let diagonal = table.at(i - 1, j - 1);
            let left = table.at(i, j - 1);
            let up = table.at(i - 1, j);
            let min = diagonal.min(left).min(up);
            if min == diagonal {
                Step::Diagonal
            } else if min == left {
                Step::Left
            } else {
                Step::Up
            }
        };

        let column = match step {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
                AlignmentColumn {
                    source: source.get(i).copied(),
                    target: target.get(j).copied(),
                }
            }
            Step::Left => {
                j -= 1;
                AlignmentColumn {
                    source: None,
                    target: target.get(j).copied(),
                }
            }
            Step::Up => {
                i -= 1;
                AlignmentColumn {
                    source: source.get(i).copied(),
                    target: None,
                }
            }
        };
        columns.push(column);
    }

    columns.reverse();
    columns
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Diagonal,
    Left,
    Up,
}
