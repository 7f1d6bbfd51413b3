//! Color-name classification for the boundary-extraction collaborator.
//!
//! The core never touches pixels; it only publishes the capability
//! interface a color-mask extractor needs: color name → HSV range(s).
//! Hue wraps at the red end of the spectrum, so red maps to two ranges.

use crate::error::PathError;

/// One HSV triple. Hue is 0-179 (half-degrees), saturation and value 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// An inclusive HSV bound pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

/// The range(s) a color name maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRange {
    /// A single contiguous hue window.
    Single(HsvRange),
    /// Two windows for hues that wrap around the ends of the hue axis.
    Wrapped(HsvRange, HsvRange),
}

/// Capability interface: color name → HSV filter range(s).
///
/// Implemented here by [`NamedColorClassifier`]; a boundary-extraction
/// collaborator may substitute its own mapping.
pub trait ColorClassifier {
    fn classify(&self, name: &str) -> Result<ColorRange, PathError>;
}

const fn range(lower: (u8, u8, u8), upper: (u8, u8, u8)) -> HsvRange {
    HsvRange {
        lower: Hsv::new(lower.0, lower.1, lower.2),
        upper: Hsv::new(upper.0, upper.1, upper.2),
    }
}

/// Common color ranges in HSV.
const COLOR_RANGES: &[(&str, HsvRange)] = &[
    ("blue", range((90, 50, 50), (130, 255, 255))),
    ("dark_blue", range((100, 100, 50), (140, 255, 255))),
    ("light_blue", range((80, 50, 50), (110, 255, 255))),
    ("navy", range((100, 150, 0), (140, 255, 180))),
    ("green", range((40, 50, 50), (80, 255, 255))),
    ("yellow", range((20, 100, 100), (40, 255, 255))),
    ("orange", range((10, 100, 100), (25, 255, 255))),
    ("purple", range((125, 50, 50), (155, 255, 255))),
    ("pink", range((140, 50, 100), (170, 255, 255))),
    ("black", range((0, 0, 0), (180, 255, 50))),
    ("white", range((0, 0, 200), (180, 30, 255))),
    ("gray", range((0, 0, 100), (180, 30, 200))),
];

/// Red straddles the hue wrap point and needs both end windows.
const RED_LOW: HsvRange = range((0, 100, 100), (10, 255, 255));
const RED_HIGH: HsvRange = range((160, 100, 100), (179, 255, 255));

/// The built-in name-keyed classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedColorClassifier;

impl ColorClassifier for NamedColorClassifier {
    fn classify(&self, name: &str) -> Result<ColorRange, PathError> {
        if name == "red" {
            return Ok(ColorRange::Wrapped(RED_LOW, RED_HIGH));
        }
        COLOR_RANGES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|&(_, r)| ColorRange::Single(r))
            .ok_or_else(|| PathError::UnknownColor {
                name: name.to_string(),
                known: known_colors().join(", "),
            })
    }
}

/// Names accepted by [`NamedColorClassifier`].
pub fn known_colors() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COLOR_RANGES.iter().map(|(key, _)| *key).collect();
    names.push("red");
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_is_a_single_range() {
        let classified = NamedColorClassifier.classify("blue").unwrap();
        match classified {
            ColorRange::Single(r) => {
                assert_eq!(r.lower, Hsv::new(90, 50, 50));
                assert_eq!(r.upper, Hsv::new(130, 255, 255));
            }
            ColorRange::Wrapped(..) => panic!("blue should not wrap"),
        }
    }

    #[test]
    fn red_wraps_around_the_hue_axis() {
        match NamedColorClassifier.classify("red").unwrap() {
            ColorRange::Wrapped(low, high) => {
                assert_eq!(low.upper.h, 10);
                assert_eq!(high.lower.h, 160);
                assert_eq!(high.upper.h, 179);
            }
            ColorRange::Single(_) => panic!("red must map to two ranges"),
        }
    }

    #[test]
    fn unknown_color_lists_known_names() {
        let err = NamedColorClassifier.classify("mauve").unwrap_err();
        match err {
            PathError::UnknownColor { name, known } => {
                assert_eq!(name, "mauve");
                assert!(known.contains("navy"));
                assert!(known.contains("red"));
            }
            other => panic!("expected UnknownColor, got {:?}", other),
        }
    }

    #[test]
    fn every_known_color_classifies() {
        for name in known_colors() {
            assert!(NamedColorClassifier.classify(name).is_ok(), "{name}");
        }
    }
}
