use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;

#[rstest]
#[case(dec!(650), "650.00")]
#[case(dec!(0), "0.00")]
#[case(dec!(1.005), "1.01")]
#[case(dec!(-1.005), "-1.01")]
#[case(dec!(2.344), "2.34")]
#[case(dec!(-70), "-70.00")]
#[case(dec!(12.5), "12.50")]
fn test_round_money(#[case] input: Decimal, #[case] expected: &str) {
    assert_eq!(round_money(input).to_string(), expected);
}

#[test]
fn test_round_money_keeps_scale() {
    assert_eq!(round_money(dec!(100)).scale(), MONEY_SCALE);
    assert_eq!(round_money(dec!(0.1234)).scale(), MONEY_SCALE);
}

#[test]
fn test_round_money_is_idempotent() {
    let once = round_money(dec!(123.4567));
    assert_eq!(round_money(once), once);
}
