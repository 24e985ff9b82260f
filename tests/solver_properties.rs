use quadratic::core::report::Report;
use quadratic::core::{solve, Coefficients, RootKind, Roots, SolveError};

fn solution(a: f64, b: f64, c: f64) -> quadratic::core::Solution {
    solve(Coefficients::new(a, b, c).unwrap())
}

#[test]
fn zero_a_rejected_for_any_b_c() {
    for &(b, c) in &[(0.0, 0.0), (1.0, -1.0), (-7.5, 1e9), (1e-300, 3.0)] {
        assert_eq!(Coefficients::new(0.0, b, c), Err(SolveError::ZeroLeadingCoefficient));
    }
    assert_eq!(Coefficients::parse("0", "1", "2"), Err(SolveError::ZeroLeadingCoefficient));
    assert_eq!(Coefficients::parse("-0", "x", "y"), Err(SolveError::ZeroLeadingCoefficient));
}

#[test]
fn vertex_y_is_polynomial_at_vertex_x() {
    for step in -10..=10 {
        let a = step as f64 * 0.5;
        if a == 0.0 {
            continue;
        }
        for b in [-9.5, -1.0, 0.0, 0.25, 3.0, 120.0] {
            for c in [-4.0, 0.0, 1.0, 17.5] {
                let s = solution(a, b, c);
                assert_eq!(s.vertex.y, s.coefficients.evaluate(s.vertex.x));
                assert_eq!(s.vertex.x, -b / (2.0 * a));
            }
        }
    }
}

#[test]
fn real_roots_ascend_and_vanish() {
    for &(a, b, c) in &[(1.0, -3.0, 2.0), (-1.0, 1.0, 6.0), (2.0, 5.0, -3.0), (-0.5, -4.0, 1.0)] {
        let s = solution(a, b, c);
        match s.roots {
            Roots::TwoReal { x1, x2 } => {
                assert!(x1 < x2, "{x1} < {x2} for {a},{b},{c}");
                for x in [x1, x2] {
                    assert!(s.coefficients.evaluate(x).abs() < 1e-9);
                }
            }
            other => panic!("expected two real roots, got {other:?}"),
        }
    }
}

#[test]
fn classification_follows_discriminant_sign() {
    assert_eq!(solution(1.0, -3.0, 2.0).kind(), RootKind::TwoReal);
    assert_eq!(solution(1.0, 2.0, 1.0).kind(), RootKind::OneReal);
    assert_eq!(solution(1.0, 0.0, 1.0).kind(), RootKind::ComplexPair);
    assert_eq!(solution(4.0, 4.0, 1.0).discriminant, 0.0);
}

#[test]
fn report_two_real() {
    let s = solution(1.0, -3.0, 2.0);
    insta::assert_snapshot!(Report::new(&s, 2).to_string(), @r"
    Solving 1x² - 3x + 2 = 0
    Discriminant > 0
    Discriminant = 1
    Two real solutions
    x1 = 1
    x2 = 2
    Vertex = (1.5, -0.25)
    ");
}

#[test]
fn report_repeated_root() {
    let s = solution(1.0, 2.0, 1.0);
    insta::assert_snapshot!(Report::new(&s, 2).to_string(), @r"
    Solving 1x² + 2x + 1 = 0
    Discriminant = 0
    One real solution
    x = -1
    Vertex = (-1, 0)
    ");
}

#[test]
fn report_complex_pair() {
    let s = solution(1.0, 0.0, 1.0);
    insta::assert_snapshot!(Report::new(&s, 2).to_string(), @r"
    Solving 1x² + 0x + 1 = 0
    Discriminant < 0
    Discriminant = -4
    Two complex solutions
    x1 = 0 + 1i
    x2 = 0 - 1i
    Vertex = (0, 1)
    ");
}

#[test]
fn report_respects_precision() {
    let s = solution(1.0, 1.0, -1.0);
    let text = Report::new(&s, 3).to_string();
    assert!(text.contains("x1 = -1.618"), "{text}");
    assert!(text.contains("x2 = 0.618"), "{text}");
    assert!(text.contains("Discriminant = 5"), "{text}");
}
