use platformer_phys::math::{overlaps, Axis, Rect, Vector2};
use platformer_phys::{BodyHandle, ContactFlags, Contacts, Direction, StepClock};
use approx::{assert_relative_eq, relative_eq};
use std::time::{Duration, Instant};

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, -6.0);

    // Addition
    assert_eq!(v1 + v2, Vector2::new(5.0, -4.0));

    // Subtraction
    assert_eq!(v2 - v1, Vector2::new(3.0, -8.0));

    // Scalar multiplication, both sides
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, v1 * 2.0);

    // Negation
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * -6.0);

    // Length
    assert_relative_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(v2.abs(), Vector2::new(4.0, 6.0));

    // Per-axis access
    assert_eq!(v2.component(Axis::X), 4.0);
    assert_eq!(v2.component(Axis::Y), -6.0);
    assert_eq!(Vector2::along(Axis::Y, -1.5), Vector2::new(0.0, -1.5));

    assert!(Vector2::zero().is_zero());
    assert!(!Vector2::new(f32::NAN, 0.0).is_finite());
}

#[test]
fn test_vector2_nalgebra_interop() {
    let v = Vector2::new(1.5, -2.5);
    let n: nalgebra::Vector2<f32> = v.into();
    assert_eq!(n.x, 1.5);
    assert_eq!(n.y, -2.5);
    assert_eq!(Vector2::from(n), v);

    assert_eq!(Vector2::from([3.0, 4.0]), Vector2::new(3.0, 4.0));
    assert_eq!(Vector2::from((3.0, 4.0)), Vector2::new(3.0, 4.0));

    assert!(relative_eq!(Vector2::new(0.1 + 0.2, 1.0), Vector2::new(0.3, 1.0)));
}

#[test]
fn test_rect_geometry() {
    let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);

    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.right(), 40.0);
    assert_eq!(rect.top(), 20.0);
    assert_eq!(rect.bottom(), 60.0);
    assert_eq!(rect.center(), Vector2::new(25.0, 40.0));
    assert_eq!(rect.half_extents(), Vector2::new(15.0, 20.0));

    assert_eq!(rect.shifted(Axis::X, -1.0).left(), 9.0);
    assert_eq!(rect.shifted(Axis::Y, 1.0).bottom(), 61.0);
    assert_eq!(rect.translated(Vector2::new(1.0, 1.0)).position, Vector2::new(11.0, 21.0));

    assert!(rect.contains_point(Vector2::new(10.0, 60.0)));
    assert!(!rect.contains_point(Vector2::new(9.9, 30.0)));
}

#[test]
fn test_rect_overlap() {
    let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
    let far = Rect::from_xywh(20.0, 0.0, 10.0, 10.0);
    let below = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);

    assert!(a.overlaps(&b));
    assert!(overlaps(&b, &a));
    assert!(!a.overlaps(&far));
    assert!(!a.overlaps_inclusive(&far));

    // Touching on an edge counts only for the inclusive test
    assert!(!a.overlaps(&below));
    assert!(a.overlaps_inclusive(&below));

    assert_eq!(a.intersection(&b), Some(Rect::from_xywh(5.0, 5.0, 5.0, 5.0)));
    assert_eq!(a.intersection(&below), None);

    // Containment is an overlap as well
    let inner = Rect::from_xywh(2.0, 2.0, 1.0, 1.0);
    assert!(a.overlaps(&inner));
    assert!(inner.overlaps(&a));
}

#[test]
fn test_directions() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_axis_sign(direction.axis(), direction.sign()), direction);
    }
    assert_eq!(Direction::YPos.sign(), 1.0);
    assert_eq!(Direction::XNeg.axis(), Axis::X);
}

#[test]
fn test_contacts_and_flags() {
    let floor = BodyHandle::from_index(3);
    let wall = BodyHandle::from_index(7);

    let mut contacts = Contacts::none();
    assert!(!contacts.is_grounded());
    assert_eq!(contacts.flags().arrows(), "----");

    contacts.set(Direction::YPos, Some(floor));
    contacts.set(Direction::XNeg, Some(wall));

    assert!(contacts.is_grounded());
    assert_eq!(contacts.get(Direction::YPos), Some(floor));
    assert_eq!(contacts.vertical(), Some(floor));
    assert_eq!(contacts.horizontal(), Some(wall));
    assert_eq!(contacts.flags(), ContactFlags::Y_POS | ContactFlags::X_NEG);
    assert_eq!(contacts.flags().arrows(), "<-v-");
    assert_eq!(ContactFlags::all().arrows(), "<^v>");
}

#[test]
fn test_step_clock() {
    let start = Instant::now();
    let mut clock = StepClock::starting_at(start);

    assert_relative_eq!(clock.tick_at(start + Duration::from_millis(16)), 0.016, epsilon = 1.0e-6);
    assert_relative_eq!(clock.tick_at(start + Duration::from_millis(50)), 0.034, epsilon = 1.0e-6);

    // Never negative
    assert_eq!(clock.tick_at(start), 0.0);
}
