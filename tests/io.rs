use strassen::generate::{MAX_VALUE, MIN_VALUE, random_matrix, random_pair};
use strassen::io::{read_pair, write_matrix, write_pair};
use strassen::{Matrix, MatmulError, StrassenConfig, Strategy, matrices_equal, multiply_with};

use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================
// Reading
// ============================================================

#[test]
fn test_read_pair_row_major() {
    let input = "2\n1 2\n3 4\n\n5 6\n7 8\n";
    let (a, b) = read_pair(input.as_bytes()).unwrap();

    assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(b.to_rows(), vec![vec![5, 6], vec![7, 8]]);

    let c = multiply_with(Strategy::Cached, &StrassenConfig::default(), &a, &b).unwrap();
    assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
}

#[test]
fn test_read_ignores_line_layout() {
    let input = "  2 -4 3\t2 -1\n1\n-2 -3 4";
    let (a, b) = read_pair(input.as_bytes()).unwrap();

    assert_eq!(a.to_rows(), vec![vec![-4, 3], vec![2, -1]]);
    assert_eq!(b.to_rows(), vec![vec![1, -2], vec![-3, 4]]);
}

#[test]
fn test_read_empty_input() {
    let err = read_pair("".as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::UnexpectedEof { expected: 1, got: 0 }));
}

#[test]
fn test_read_bad_side() {
    for token in ["x", "-2", "2.5"] {
        let err = read_pair(token.as_bytes()).unwrap_err();
        assert!(
            matches!(&err, MatmulError::Parse { what: "matrix side", token: t } if t == token),
            "{:?}",
            err
        );
    }
}

#[test]
fn test_read_bad_element() {
    let err = read_pair("2\n1 2\n3 four\n5 6 7 8".as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::Parse { what: "matrix element", .. }));

    let err = read_pair("1\n99999999999\n1".as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::Parse { what: "matrix element", .. }));
}

#[test]
fn test_read_truncated_second_matrix() {
    let err = read_pair("2\n1 2 3 4\n5 6 7".as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::UnexpectedEof { expected: 4, got: 3 }));
}

#[test]
fn test_read_huge_header_fails_cleanly() {
    let err = read_pair("100000 1 2 3".as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::UnexpectedEof { got: 3, .. }));

    let err = read_pair(format!("{}", usize::MAX).as_bytes()).unwrap_err();
    assert!(matches!(err, MatmulError::UnsupportedSize { .. }));
}

// ============================================================
// Writing
// ============================================================

#[test]
fn test_write_matrix_format() {
    let m = Matrix::from_rows(vec![vec![1, -2], vec![30, 4]]).unwrap();
    let mut out = Vec::new();
    write_matrix(&mut out, &m).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 -2\n30 4\n");
}

#[test]
fn test_write_pair_reads_back() {
    let (a, b) = random_pair(8, Some(42));
    let mut out = Vec::new();
    write_pair(&mut out, &a, &b).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("8\n"));

    let (a2, b2) = read_pair(text.as_bytes()).unwrap();
    assert!(matrices_equal(&a, &a2));
    assert!(matrices_equal(&b, &b2));
}

// ============================================================
// Generation
// ============================================================

#[test]
fn test_seeded_pair_is_deterministic() {
    let (a1, b1) = random_pair(16, Some(1234));
    let (a2, b2) = random_pair(16, Some(1234));
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);

    let (a3, _) = random_pair(16, Some(4321));
    assert_ne!(a1, a3);
}

#[test]
fn test_generated_values_in_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let m = random_matrix(64, &mut rng);

    assert_eq!(m.side(), 64);
    assert!(m.as_slice().iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    assert!(m.as_slice().contains(&MIN_VALUE));
    assert!(m.as_slice().contains(&MAX_VALUE));
}

#[test]
fn test_unseeded_pair_has_requested_side() {
    let (a, b) = random_pair(5, None);
    assert_eq!((a.side(), b.side()), (5, 5));
}
