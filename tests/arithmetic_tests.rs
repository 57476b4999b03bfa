use labkit::arith::{check_subtraction, divide, median, subtract_is_safe, sum, Subtraction, Word};
use labkit::LabError;

#[test]
fn test_adder_matches_modular_sum() {
    for x in 0..=255u8 {
        for y in 0..=255u8 {
            let result = sum(&Word::from_value(x), &Word::from_value(y));
            let total = x as u16 + y as u16;

            assert_eq!(result.word.value() as u16, total % 256, "{} + {}", x, y);
            assert_eq!(result.overflow, total >= 256, "{} + {}", x, y);
            assert_eq!(
                result.word.to_string(),
                format!("{:08b}", total % 256),
                "{} + {}",
                x,
                y
            );
        }
    }
}

#[test]
fn test_adder_report_text() {
    let x = Word::parse("10000000").unwrap();
    let y = Word::parse("10000001").unwrap();
    assert_eq!(sum(&x, &y).report(), "00000001\noverflow\n");

    let x = Word::parse("00001111").unwrap();
    let y = Word::parse("00000001").unwrap();
    assert_eq!(sum(&x, &y).report(), "00010000\n");
}

#[test]
fn test_divide_examples() {
    let d = divide(7, 2).unwrap();
    assert_eq!((d.quotient, d.remainder, d.real_quotient), (3, 1, 3.5));

    let d = divide(-7, 2).unwrap();
    assert_eq!((d.quotient, d.remainder), (-3, -1));

    assert!(matches!(divide(5, 0), Err(LabError::InvalidArgument(_))));
}

#[test]
fn test_divide_identity() {
    for &(x, y) in &[(17, 5), (-17, 5), (17, -5), (-17, -5), (0, 3), (i32::MAX, 2)] {
        let d = divide(x, y).unwrap();
        assert_eq!(d.quotient * y + d.remainder, x);
        assert!(d.remainder.abs() < y.abs());
    }
}

#[test]
fn test_median_examples() {
    assert_eq!(median(1.0, 5.0, 3.0), 3.0);
    assert_eq!(median(5.0, 5.0, 5.0), 5.0);
    assert_eq!(median(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(median(0.5, -2.25, 10.0), 0.5);
}

#[test]
fn test_subtraction_polarity() {
    // 1 = safe, 0 = overflow
    assert_eq!(u8::from(subtract_is_safe(10, 3)), 1);
    assert_eq!(u8::from(subtract_is_safe(i32::MIN, 1)), 0);
    assert_eq!(check_subtraction(-3, 4), Subtraction::Safe(-7));
    assert_eq!(check_subtraction(i32::MAX, -1), Subtraction::Overflow);
}
