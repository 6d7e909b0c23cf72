#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Truncates toward zero and narrows to `i32`, saturating like `as` does.
#[inline]
pub fn trunc_i32(x: f64) -> i32 {
    libm::trunc(x) as i32
}
