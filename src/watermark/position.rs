//! Position calculation for logo placement.
//!
//! Five anchors are supported. Corner anchors keep a fixed margin from both
//! adjacent edges; `Center` ignores the margin.
//!
//! # Example
//!
//! ```
//! use logomark::watermark::{calculate_position, Anchor, Dimensions, Placement};
//!
//! let image = Dimensions::new(1000, 800);
//! let logo = Dimensions::new(400, 200);
//!
//! let pos = calculate_position(Anchor::BottomRight, image, logo, 20);
//! assert_eq!(pos, Placement::new(580, 580)); // 1000 - 400 - 20, 800 - 200 - 20
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left pixel where the logo is pasted. May be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Named placement of the logo on the base image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid position '{0}'. Use one of: topleft, topright, center, bottomleft, bottomright")]
pub struct UnknownAnchor(pub String);

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::Center,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Command-line name of the anchor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
            Self::Center => "center",
        }
    }

    /// Lenient lookup: unrecognized names map to `BottomRight`.
    ///
    /// The CLI validates anchors strictly through [`FromStr`]; this is for
    /// callers that would rather not fail on a typo.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownAnchor| {
            tracing::warn!(position = name, error = %err, "Falling back to bottomright");
            Self::BottomRight
        })
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = UnknownAnchor;

    /// Exact, case-sensitive match on the command-line names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.name() == s)
            .ok_or_else(|| UnknownAnchor(s.to_string()))
    }
}

/// Calculate where the logo goes for the given anchor.
///
/// # Arguments
///
/// * `anchor` - The requested placement
/// * `image` - Dimensions of the base image
/// * `logo` - Dimensions of the (already resized) logo
/// * `margin` - Margin from edges in pixels, ignored for `Center`
///
/// # Returns
///
/// The (x, y) coordinates of the logo's top-left corner. Coordinates are
/// negative when the logo does not fit; nothing is clamped.
pub fn calculate_position(
    anchor: Anchor,
    image: Dimensions,
    logo: Dimensions,
    margin: u32,
) -> Placement {
    let img_w = i64::from(image.width);
    let img_h = i64::from(image.height);
    let logo_w = i64::from(logo.width);
    let logo_h = i64::from(logo.height);
    let m = i64::from(margin);

    let (x, y) = match anchor {
        Anchor::TopLeft => (m, m),
        Anchor::TopRight => (img_w - logo_w - m, m),
        Anchor::BottomLeft => (m, img_h - logo_h - m),
        Anchor::BottomRight => (img_w - logo_w - m, img_h - logo_h - m),
        Anchor::Center => ((img_w - logo_w).div_euclid(2), (img_h - logo_h).div_euclid(2)),
    };

    Placement::new(saturate(x), saturate(y))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Check if a logo at `pos` would be at least partially visible.
pub fn is_visible(pos: Placement, image: Dimensions, logo: Dimensions) -> bool {
    let right = i64::from(pos.x) + i64::from(logo.width);
    let bottom = i64::from(pos.y) + i64::from(logo.height);

    logo.width > 0
        && logo.height > 0
        && i64::from(pos.x) < i64::from(image.width)
        && i64::from(pos.y) < i64::from(image.height)
        && right > 0
        && bottom > 0
}
