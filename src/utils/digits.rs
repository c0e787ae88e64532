use log::trace;
use num_bigint::BigUint;

/// Number of decimal digits in `value`. Zero is written with one digit.
pub fn digit_count(value: &BigUint) -> usize {
    if value.bits() == 0 {
        return 1;
    }
    value.to_str_radix(10).len()
}

/// Join the decimal digits of `left` and `right` into a new number.
///
/// `concat_digits(12, 34)` is `1234`. A leading zero on the left disappears,
/// so `concat_digits(0, 5)` is `5`.
pub fn concat_digits(left: &BigUint, right: &BigUint) -> BigUint {
    let mut shift = BigUint::from(10u32);
    while shift <= *right {
        shift *= 10u32;
    }
    let result = left * &shift + right;
    trace!("Concatenated {} || {} = {}", left, right, result);
    result
}
