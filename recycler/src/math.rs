// `f64::floor`/`ceil` need `std`; the fallbacks round through `i64`.

// Every f64 at or beyond 2^52 in magnitude is already integral.
#[cfg(not(feature = "std"))]
const INTEGRAL_BOUND: f64 = 4_503_599_627_370_496.0;

/// Largest row index the engine hands out. Row positions stay exact in `f64` up to here, and a
/// window of any realistic pool size can extend past it without overflowing `i64`.
pub(crate) const ROW_LIMIT: i64 = 1 << 53;

#[cfg(feature = "std")]
pub(crate) fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(not(feature = "std"))]
pub(crate) fn floor(x: f64) -> f64 {
    if !(x > -INTEGRAL_BOUND && x < INTEGRAL_BOUND) {
        return x;
    }
    let t = x as i64 as f64;
    if t > x { t - 1.0 } else { t }
}

#[cfg(feature = "std")]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(not(feature = "std"))]
pub(crate) fn ceil(x: f64) -> f64 {
    if !(x > -INTEGRAL_BOUND && x < INTEGRAL_BOUND) {
        return x;
    }
    let t = x as i64 as f64;
    if t < x { t + 1.0 } else { t }
}

/// `floor(offset / row_height)` as a row index, clamped to `±ROW_LIMIT`.
pub(crate) fn row_at(offset: f64, row_height: f64) -> i64 {
    let row = floor(offset / row_height);
    if row >= ROW_LIMIT as f64 {
        ROW_LIMIT
    } else if row <= -(ROW_LIMIT as f64) {
        -ROW_LIMIT
    } else {
        row as i64
    }
}
