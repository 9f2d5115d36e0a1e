use super::*;

#[test]
fn test_rounds_small_counts() {
    assert_eq!(rounds(0), 0);
    assert_eq!(rounds(1), 0);
    assert_eq!(rounds(2), 1);
    assert_eq!(rounds(3), 2);
    assert_eq!(rounds(4), 2);
    assert_eq!(rounds(5), 3);
    assert_eq!(rounds(8), 3);
    assert_eq!(rounds(9), 4);
    assert_eq!(rounds(128), 7);
    assert_eq!(rounds(129), 8);
}

#[test]
fn test_rounds_matches_float_log2() {
    for n in 2..=512usize {
        let expected = (n as f64).log2().ceil() as u32;
        assert_eq!(rounds(n), expected, "n = {}", n);
    }
}

#[test]
fn test_checked_rounds_rejects_negative() {
    assert!(matches!(checked_rounds(-1), Err(BracketError::InvalidInput(_))));
    assert_eq!(checked_rounds(6).unwrap(), 3);
    assert_eq!(checked_rounds(0).unwrap(), 0);
}

#[test]
fn test_bracket_size() {
    assert_eq!(bracket_size(0).unwrap(), 2);
    assert_eq!(bracket_size(1).unwrap(), 2);
    assert_eq!(bracket_size(2).unwrap(), 2);
    assert_eq!(bracket_size(3).unwrap(), 4);
    assert_eq!(bracket_size(5).unwrap(), 8);
    assert_eq!(bracket_size(16).unwrap(), 16);
    assert_eq!(bracket_size(17).unwrap(), 32);
}

#[test]
fn test_bracket_size_too_large_is_error() {
    let largest = 1usize << (usize::BITS - 1);
    assert_eq!(bracket_size(largest).unwrap(), largest);
    assert!(matches!(bracket_size(largest + 1), Err(BracketError::InvalidInput(_))));
    assert!(matches!(bracket_size(usize::MAX), Err(BracketError::InvalidInput(_))));
}

#[test]
fn test_round_math_at_usize_limits() {
    assert_eq!(rounds(usize::MAX), usize::BITS);
    assert_eq!(matches_in_round(16, usize::BITS), 0);
    assert_eq!(matches_in_round(16, u32::MAX), 0);
    assert_eq!(round_name(1, 66), "Round of 73786976294838206464");
    assert_eq!(round_name(1, 200), "Round of 2^200");
}

#[test]
fn test_matches_in_round_halves() {
    assert_eq!(matches_in_round(16, 1), 8);
    assert_eq!(matches_in_round(16, 2), 4);
    assert_eq!(matches_in_round(16, 3), 2);
    assert_eq!(matches_in_round(16, 4), 1);
}

#[test]
fn test_round_names() {
    assert_eq!(round_name(1, 1), "Final");

    assert_eq!(round_name(1, 2), "Semi-Finals");
    assert_eq!(round_name(2, 2), "Final");

    assert_eq!(round_name(1, 3), "Quarter-Finals");
    assert_eq!(round_name(2, 3), "Semi-Finals");
    assert_eq!(round_name(3, 3), "Final");

    assert_eq!(round_name(1, 4), "Round of 16");
    assert_eq!(round_name(1, 5), "Round of 32");
    assert_eq!(round_name(2, 5), "Round of 16");
}
