//! Named constants published by the core, mirroring the reference design's `NEG_ONE`, `ZERO`,
//! `ONE`, ..., `E`, `PI`.

use crate::decimal::Decimal;

/// `-1`.
pub const NEG_ONE: Decimal = Decimal::new_unchecked(true, 1, 0);
/// `0`.
pub const ZERO: Decimal = Decimal::new_unchecked(false, 0, 0);
/// `1`.
pub const ONE: Decimal = Decimal::new_unchecked(false, 1, 0);
/// `2`.
pub const TWO: Decimal = Decimal::new_unchecked(false, 2, 0);
/// `10`.
pub const TEN: Decimal = Decimal::new_unchecked(false, 10, 0);
/// `100`.
pub const HUNDRED: Decimal = Decimal::new_unchecked(false, 100, 0);
/// `1000`.
pub const THOUSAND: Decimal = Decimal::new_unchecked(false, 1000, 0);

/// Euler's number to 19 significant digits: `2.718281828459045235`.
pub const E: Decimal = Decimal::new_unchecked(false, 2_718_281_828_459_045_235, 18);
/// Pi to 19 significant digits: `3.141592653589793238`.
pub const PI: Decimal = Decimal::new_unchecked(false, 3_141_592_653_589_793_238, 18);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_expected_shape() {
        assert_eq!(ZERO.coefficient(), 0);
        assert!(!ZERO.is_negative());
        assert_eq!(ONE.coefficient(), 1);
        assert_eq!(NEG_ONE.is_negative(), true);
        assert_eq!(E.scale(), 18);
        assert_eq!(PI.scale(), 18);
    }
}
