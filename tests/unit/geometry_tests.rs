// Sizing and placement unit tests

use logomark::constants::{DEFAULT_MARGIN, DEFAULT_SCALE};
use logomark::watermark::{
    calculate_position, is_visible, parse_ratio, target_logo_size, Anchor, Dimensions, Placement,
};
use rstest::rstest;

#[test]
fn test_default_ratio_sizes_logo_to_forty_percent() {
    let target = target_logo_size(1000, Dimensions::new(200, 100), parse_ratio("5:2").scale());
    assert_eq!(target, Dimensions::new(400, 200));
}

#[test]
fn test_target_width_is_floored() {
    // 999 * 0.4 = 399.6
    let target = target_logo_size(999, Dimensions::new(100, 100), DEFAULT_SCALE);
    assert_eq!(target.width, 399);
}

#[rstest]
#[case(1000, 300, 100)]
#[case(1920, 640, 480)]
#[case(777, 123, 45)]
fn test_aspect_ratio_preserved_within_a_pixel(
    #[case] base_width: u32,
    #[case] logo_width: u32,
    #[case] logo_height: u32,
) {
    let target = target_logo_size(
        base_width,
        Dimensions::new(logo_width, logo_height),
        parse_ratio("4:1").scale(),
    );
    let exact = target.width as f64 * logo_height as f64 / logo_width as f64;
    assert!((target.height as f64 - exact).abs() <= 1.0);
}

#[rstest]
#[case(Anchor::TopLeft, 20, 20)]
#[case(Anchor::TopRight, 580, 20)]
#[case(Anchor::BottomLeft, 20, 580)]
#[case(Anchor::BottomRight, 580, 580)]
#[case(Anchor::Center, 300, 300)]
fn test_anchor_offsets(#[case] anchor: Anchor, #[case] x: i32, #[case] y: i32) {
    let pos = calculate_position(
        anchor,
        Dimensions::new(1000, 800),
        Dimensions::new(400, 200),
        DEFAULT_MARGIN,
    );
    assert_eq!(pos, Placement::new(x, y));
}

#[test]
fn test_every_anchor_fits_when_image_is_large_enough() {
    let image = Dimensions::new(640, 480);
    let logo = Dimensions::new(200, 100);
    for anchor in Anchor::ALL {
        let pos = calculate_position(anchor, image, logo, DEFAULT_MARGIN);
        assert!(pos.x >= 0 && pos.y >= 0, "{anchor} starts off-canvas");
        assert!(pos.x as u32 + logo.width <= image.width, "{anchor} overflows right");
        assert!(pos.y as u32 + logo.height <= image.height, "{anchor} overflows bottom");
        assert!(is_visible(pos, image, logo));
    }
}

#[test]
fn test_oversized_logo_goes_negative() {
    let pos = calculate_position(
        Anchor::BottomRight,
        Dimensions::new(100, 100),
        Dimensions::new(150, 150),
        DEFAULT_MARGIN,
    );
    assert_eq!(pos, Placement::new(-70, -70));
    assert!(is_visible(pos, Dimensions::new(100, 100), Dimensions::new(150, 150)));
}

#[test]
fn test_anchor_names_round_trip_through_display() {
    for anchor in Anchor::ALL {
        let parsed: Anchor = anchor.to_string().parse().unwrap();
        assert_eq!(parsed, anchor);
    }
}

#[test]
fn test_lenient_anchor_defaults_to_bottom_right() {
    assert_eq!(Anchor::from_name_or_default("middle"), Anchor::BottomRight);
    assert_eq!(Anchor::from_name_or_default("topleft"), Anchor::TopLeft);
}
