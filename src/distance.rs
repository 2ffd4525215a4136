//! Levenshtein edit distance over `char` sequences.
//!
//! Distances are computed bottom-up over suffix pairs: cell `(i, j)` of the
//! table holds the cost of turning `a[i..]` into `b[j..]`, so the answer for the
//! whole strings ends up in cell `(0, 0)`.

/// Returned for cells outside the table. Large enough to lose every `min`,
/// small enough that adding an edit cost to it cannot overflow.
pub const UNREACHABLE: usize = usize::MAX / 2;

/// Per-call memo table, `rows × cols` where the dimensions are the char
/// lengths of the two strings. Boundary costs (one suffix exhausted) are
/// derived rather than stored.
struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl DistanceTable {
    fn new(rows: usize, cols: usize) -> Self {
        DistanceTable {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    fn cost(&self, i: usize, j: usize) -> usize {
        if i > self.rows || j > self.cols {
            return UNREACHABLE;
        }
        if i == self.rows {
            return self.cols - j;
        }
        if j == self.cols {
            return self.rows - i;
        }
        self.cells[i * self.cols + j].unwrap_or(UNREACHABLE)
    }

    fn set(&mut self, i: usize, j: usize, cost: usize) {
        self.cells[i * self.cols + j] = Some(cost);
    }
}

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (last_i, last_j) = (a.len() - 1, b.len() - 1);
    let mut table = DistanceTable::new(a.len(), b.len());

    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            let cost = if i == last_i && j == last_j {
                usize::from(a[i] != b[j])
            } else if a[i] == b[j] {
                table.cost(i + 1, j + 1)
            } else {
                let insert = table.cost(i, j + 1);
                let delete = table.cost(i + 1, j);
                let substitute = table.cost(i + 1, j + 1);
                1 + insert.min(delete).min(substitute)
            };
            table.set(i, j, cost);
        }
    }

    let result = table.cost(0, 0);
    debug_assert!(result < UNREACHABLE, "edit distance table left cell (0, 0) unset");
    result
}
