use crate::Cost;
use crate::geom::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> Cost {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as Cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric() {
        let a = Cell::new(0, 2);
        let b = Cell::new(2, 0);
        assert_eq!(manhattan(a, b), 4);
        assert_eq!(manhattan(b, a), 4);
        assert_eq!(manhattan(a, a), 0);
    }
}
