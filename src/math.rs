// src/math.rs

// Stateless numeric helpers backing the builtin table.

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

// --- Integer Combinatorics ---

/// Factorial of the integer part of `a`. Negative input is NaN, overflow is
/// infinity.
pub fn fac(a: f64) -> f64 {
    if a < 0.0 || a.is_nan() {
        return f64::NAN;
    }
    if a > u32::MAX as f64 {
        return f64::INFINITY;
    }
    let n = a as u64;
    let mut result: u64 = 1;
    for i in 1..=n {
        match result.checked_mul(i) {
            Some(next) => result = next,
            None => return f64::INFINITY,
        }
    }
    result as f64
}

/// Binomial coefficient over the integer parts of `n` and `r`.
pub fn ncr(n: f64, r: f64) -> f64 {
    if n < 0.0 || r < 0.0 || n < r || n.is_nan() || r.is_nan() {
        return f64::NAN;
    }
    if n > u32::MAX as f64 || r > u32::MAX as f64 {
        return f64::INFINITY;
    }
    let un = n as u64;
    let mut ur = r as u64;
    if ur > un / 2 {
        ur = un - ur;
    }
    let mut result: u64 = 1;
    for i in 1..=ur {
        let factor = un - ur + i;
        match result.checked_mul(factor) {
            Some(next) => result = next / i,
            None => return f64::INFINITY,
        }
    }
    result as f64
}

pub fn npr(n: f64, r: f64) -> f64 {
    ncr(n, r) * fac(r)
}

// --- Thin Wrappers ---

pub fn fl_abs(a: f64) -> f64 { a.abs() }
pub fn fl_acos(a: f64) -> f64 { a.acos() }
pub fn fl_asin(a: f64) -> f64 { a.asin() }
pub fn fl_atan(a: f64) -> f64 { a.atan() }
pub fn fl_ceil(a: f64) -> f64 { a.ceil() }
pub fn fl_cos(a: f64) -> f64 { a.cos() }
pub fn fl_cosh(a: f64) -> f64 { a.cosh() }
pub fn fl_exp(a: f64) -> f64 { a.exp() }
pub fn fl_floor(a: f64) -> f64 { a.floor() }
pub fn fl_ln(a: f64) -> f64 { a.ln() }
pub fn fl_log10(a: f64) -> f64 { a.log10() }
pub fn fl_sin(a: f64) -> f64 { a.sin() }
pub fn fl_sinh(a: f64) -> f64 { a.sinh() }
pub fn fl_sqrt(a: f64) -> f64 { a.sqrt() }
pub fn fl_tan(a: f64) -> f64 { a.tan() }
pub fn fl_tanh(a: f64) -> f64 { a.tanh() }

pub fn fl_atan2(y: f64, x: f64) -> f64 { y.atan2(x) }
pub fn fl_pow(a: f64, b: f64) -> f64 { a.powf(b) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fac() {
        assert_eq!(fac(0.0), 1.0);
        assert_eq!(fac(5.0), 120.0);
        assert_eq!(fac(5.9), 120.0);
        assert!(fac(-1.0).is_nan());
        assert_eq!(fac(100.0), f64::INFINITY);
    }

    #[test]
    fn test_ncr_npr() {
        assert_eq!(ncr(5.0, 2.0), 10.0);
        assert_eq!(ncr(10.0, 9.0), 10.0);
        assert_eq!(ncr(4.0, 0.0), 1.0);
        assert!(ncr(2.0, 3.0).is_nan());
        assert_eq!(npr(5.0, 2.0), 20.0);
    }
}
