/// Assert two values are fuzzy equal, optionally with an explicit epsilon.
///
/// Works with anything implementing a `fuzzy_eq` / `fuzzy_eq_eps` pair taking the right hand side
/// by value, e.g. scalars and [crate::core::math::Vector2].
///
/// # Examples
///
/// ```
/// # use shapegeom::assert_fuzzy_eq;
/// # use shapegeom::core::traits::FuzzyEq;
/// assert_fuzzy_eq!(0.1_f64 + 0.2, 0.3);
/// assert_fuzzy_eq!(1.0_f64, 1.05, 0.1);
/// ```
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}
