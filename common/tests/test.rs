use common::{Rect, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_normalizes_operand_order() {
    let rect = Rect::new(10.0, 20.0, 2.0, 4.0);
    assert_eq!(rect.left, 2.0);
    assert_eq!(rect.right, 10.0);
    assert_eq!(rect.top, 4.0);
    assert_eq!(rect.bottom, 20.0);
    assert_eq!(rect.width(), 8.0);
    assert_eq!(rect.height(), 16.0);
}

#[test]
fn test_center_is_per_axis_midpoint() {
    let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
    assert_eq!(rect.center(), Vec2::new(5.0, 2.0));
}

#[test]
fn test_intersects_overlapping() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_intersects_touching_edges_do_not_count() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let edge = Rect::new(10.0, 0.0, 20.0, 10.0);
    let corner = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(!a.intersects(&edge));
    assert!(!edge.intersects(&a));
    assert!(!a.intersects(&corner));
}

#[test]
fn test_contains_is_strict() {
    let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
    let inner = Rect::new(1.0, 1.0, 9.0, 9.0);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    // A rectangle does not contain an equal copy of itself.
    let copy = outer;
    assert!(!outer.contains(&copy));
    // Sharing one edge is not containment either.
    let flush = Rect::new(0.0, 1.0, 9.0, 9.0);
    assert!(!outer.contains(&flush));
}

#[test]
fn test_contains_point_half_open() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
    assert!(rect.contains_point(Vec2::new(9.999, 9.999)));
    assert!(!rect.contains_point(Vec2::new(10.0, 5.0)));
    assert!(!rect.contains_point(Vec2::new(5.0, 10.0)));
}

#[test]
fn test_from_center() {
    let rect = Rect::from_center(Vec2::new(5.0, 5.0), Vec2::new(2.0, 3.0));
    assert_eq!(rect, Rect::new(3.0, 2.0, 7.0, 8.0));
}

#[test]
fn test_random_point_inside_respects_margin() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);
    for _ in 0..100 {
        let p = rect.random_point_inside(10.0, &mut rng);
        assert!(p.x >= 10.0 && p.x <= 90.0);
        assert!(p.y >= 10.0 && p.y <= 90.0);
    }
}

#[test]
fn test_random_point_inside_degenerate_clamps() {
    let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);
    let p = rect.random_point_inside(10.0, &mut rng);
    assert_eq!(p, Vec2::new(10.0, 10.0));
}

#[test]
fn test_vec2_operators() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, -4.0);
    assert_eq!(a + b, Vec2::new(4.0, -2.0));
    assert_eq!(a - b, Vec2::new(-2.0, 6.0));
    assert_eq!(-b, Vec2::new(-3.0, 4.0));
    assert_eq!(b * 2.0, Vec2::new(6.0, -8.0));
    assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
    assert_eq!(a.dot(b), -5.0);
    assert_eq!(b.length_sq(), 25.0);
    assert_eq!(b.length(), 5.0);
}

#[test]
fn test_vec2_normalize() {
    let v = Vec2::new(3.0, 4.0).normalize();
    assert!((v.length() - 1.0).abs() < 1e-6);
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
}
