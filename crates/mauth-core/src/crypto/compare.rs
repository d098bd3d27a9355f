/// Constant-time comparison of two byte slices.
///
/// Prevents timing side-channels when comparing nonces or other
/// secret-derived data. Length is not secret; unequal lengths return
/// early.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
