//! Value-object contract for `TitleStyle`: equality distinguishes every
//! field, equal values hash identically, clones are independent, and the
//! codec round-trips.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chartkit_style::{FontSpec, FontStyle, Gradient, Paint, Point, Rgba};
use chartkit_title::{HorizontalAlignment, TitleStyle, decode, encode};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn foreground_gradient() -> Gradient {
    Gradient::new(
        Point::new(1.0, 2.0),
        Point::new(3.0, 4.0),
        Rgba::RED,
        Rgba::BLUE,
    )
}

fn background_gradient() -> Gradient {
    Gradient::new(
        Point::new(4.0, 3.0),
        Point::new(2.0, 1.0),
        Rgba::RED,
        Rgba::BLUE,
    )
}

#[test]
fn default_instances_are_equal() {
    assert_eq!(TitleStyle::default(), TitleStyle::default());
}

/// Walk every field: changing it on one side breaks equality, applying the
/// same change to the other side restores it.
#[test]
fn equality_distinguishes_every_field() {
    let mut t1 = TitleStyle::default();
    let mut t2 = TitleStyle::default();
    assert_eq!(t1, t2);

    t1 = t1.text("Test 1");
    assert_ne!(t1, t2);
    t2 = t2.text("Test 1");
    assert_eq!(t1, t2);

    let font = FontSpec::new("SansSerif", FontStyle::Normal, 15);
    t1 = t1.font(font.clone());
    assert_ne!(t1, t2);
    t2 = t2.font(font);
    assert_eq!(t1, t2);

    t1 = t1.alignment(HorizontalAlignment::Right);
    assert_ne!(t1, t2);
    t2 = t2.alignment(HorizontalAlignment::Right);
    assert_eq!(t1, t2);

    t1 = t1.paint(foreground_gradient());
    assert_ne!(t1, t2);
    t2 = t2.paint(foreground_gradient());
    assert_eq!(t1, t2);

    t1 = t1.background_paint(background_gradient());
    assert_ne!(t1, t2);
    t2 = t2.background_paint(background_gradient());
    assert_eq!(t1, t2);

    t1 = t1.max_lines(3);
    assert_ne!(t1, t2);
    t2 = t2.max_lines(3);
    assert_eq!(t1, t2);

    t1 = t1.tooltip("TTT");
    assert_ne!(t1, t2);
    t2 = t2.tooltip("TTT");
    assert_eq!(t1, t2);

    t1 = t1.url("URL");
    assert_ne!(t1, t2);
    t2 = t2.url("URL");
    assert_eq!(t1, t2);

    let flipped = !t1.expand_to_fit;
    t1 = t1.expand_to_fit(flipped);
    assert_ne!(t1, t2);
    t2 = t2.expand_to_fit(flipped);
    assert_eq!(t1, t2);
}

#[test]
fn equal_values_hash_identically() {
    let t1 = TitleStyle::default();
    let t2 = TitleStyle::default();
    assert_eq!(t1, t2);
    assert_eq!(hash_of(&t1), hash_of(&t2));

    let styled = || {
        TitleStyle::new("Revenue")
            .paint(foreground_gradient())
            .max_lines(2)
    };
    assert_eq!(hash_of(&styled()), hash_of(&styled()));
}

#[test]
fn clone_is_equal_but_distinct() {
    let original = TitleStyle::new("Revenue").paint(foreground_gradient());
    let copy = original.clone();
    assert_eq!(original, copy);

    // Mutating the clone's gradient must not leak into the original.
    let mut copy = copy;
    if let Paint::Gradient(g) = &mut copy.paint {
        g.end_color = Rgba::GREEN;
    }
    assert_ne!(original, copy);
    assert_eq!(
        original.paint.as_gradient().map(|g| g.end_color),
        Some(Rgba::BLUE)
    );
}

#[test]
fn serialization_round_trip() {
    let t1 = TitleStyle::new("Test");
    let t2 = decode(&encode(&t1).unwrap()).unwrap();
    assert_eq!(t1, t2);
}

#[test]
fn serialization_round_trip_with_gradients() {
    let t1 = TitleStyle::new("Test")
        .paint(foreground_gradient())
        .background_paint(background_gradient().cyclic(true));
    let t2 = decode(&encode(&t1).unwrap()).unwrap();
    assert_eq!(t1, t2);
}
