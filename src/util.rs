/// Asserts that a numerical value is in the provided interval `[a,b]` and
/// panics with a helpful message if not
///
/// ### Example
/// ```
/// use ddqn::assert_interval;
///
/// let gamma = 0.99;
/// assert_interval!(gamma, 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn assert_interval_accepts_bounds() {
        assert_interval!(0.0, 0.0, 1.0);
        assert_interval!(1.0, 0.0, 1.0);
    }

    #[test]
    #[should_panic]
    fn assert_interval_rejects_out_of_range() {
        assert_interval!(2.0, 0.0, 1.0);
    }
}
