#![cfg(feature = "math")]
//! Unit tests for the numeric checks.

use arbors::math::{is_power_of_two, is_power_of_two_bitwise};
use rstest::rstest;

#[rstest]
#[case(1, true)]
#[case(2, true)]
#[case(4, true)]
#[case(64, true)]
#[case(1024, true)]
#[case(0, false)]
#[case(-4, false)]
#[case(3, false)]
#[case(12, false)]
#[case(1023, false)]
fn test_is_power_of_two(#[case] number: i64, #[case] expected: bool) {
    assert_eq!(is_power_of_two(number), expected);
}

#[rstest]
#[case(1, true)]
#[case(8, true)]
#[case(4096, true)]
#[case(0, false)]
#[case(-8, false)]
#[case(10, false)]
fn test_is_power_of_two_bitwise(#[case] number: i64, #[case] expected: bool) {
    assert_eq!(is_power_of_two_bitwise(number), expected);
}

#[rstest]
fn test_both_checks_agree() {
    for number in -64..=1025 {
        assert_eq!(is_power_of_two(number), is_power_of_two_bitwise(number));
    }
}
