use knight_core::Square;

/// Manhattan (L1) distance between two squares.
#[inline]
pub fn manhattan(a: Square, b: Square) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs()
}

/// Chebyshev (L∞) distance between two squares.
#[inline]
pub fn chebyshev(a: Square, b: Square) -> i64 {
    (i64::from(a.x) - i64::from(b.x))
        .abs()
        .max((i64::from(a.y) - i64::from(b.y)).abs())
}

/// Lower bound on the number of knight moves from `a` to `b`, ignoring
/// board edges.
///
/// A knight move changes the Chebyshev distance by at most 2 and the
/// Manhattan distance by at most 3, and always flips the parity of
/// `x + y`. The bound is zero only when `a == b`.
pub fn knight_lower_bound(a: Square, b: Square) -> u32 {
    let m = manhattan(a, b);
    let c = chebyshev(a, b);
    let mut bound = ((c + 1) / 2).max((m + 2) / 3);
    if bound % 2 != m % 2 {
        bound += 1;
    }
    u32::try_from(bound).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Square::new(0, 0);
        let b = Square::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(b, a), 7);
    }

    #[test]
    fn metrics_do_not_overflow() {
        let a = Square::new(i32::MIN, i32::MIN);
        let b = Square::new(i32::MAX, i32::MAX);
        assert_eq!(chebyshev(a, b), i64::from(u32::MAX));
    }

    #[test]
    fn lower_bound_small_cases() {
        let o = Square::new(0, 0);
        assert_eq!(knight_lower_bound(o, o), 0);
        assert_eq!(knight_lower_bound(o, Square::new(1, 2)), 1);
        assert_eq!(knight_lower_bound(o, Square::new(1, 0)), 1);
        assert_eq!(knight_lower_bound(o, Square::new(1, 1)), 2);
        assert_eq!(knight_lower_bound(o, Square::new(7, 0)), 5);
        assert_eq!(knight_lower_bound(o, Square::new(7, 7)), 6);
    }
}
