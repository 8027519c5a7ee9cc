/// A ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful when working with complex logic tables, such
/// as the border clamping rules in the seam algorithms, where an
/// unguarded `y - 1` on an unsigned coordinate would underflow.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
