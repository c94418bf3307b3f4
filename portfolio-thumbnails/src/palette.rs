use image::Rgb;
use std::{ops::Range, str::FromStr};
use thiserror::Error;

/// One placeholder image: written to `<key>.jpg`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Thumbnail {
    pub key: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

pub const THUMBNAILS: [Thumbnail; 10] = [
    Thumbnail {
        key: "java_basic_1",
        color: "#F39C12",
        label: "Java\nCơ Bản",
    },
    Thumbnail {
        key: "java_oop",
        color: "#E74C3C",
        label: "Java\nOOP",
    },
    Thumbnail {
        key: "java_collections",
        color: "#C0392B",
        label: "Java\nCollections",
    },
    Thumbnail {
        key: "java_stream",
        color: "#D35400",
        label: "Java\nStream API",
    },
    Thumbnail {
        key: "java_patterns",
        color: "#A93226",
        label: "Design\nPatterns",
    },
    Thumbnail {
        key: "js_es6",
        color: "#9B59B6",
        label: "JavaScript\nES6+",
    },
    Thumbnail {
        key: "js_async",
        color: "#8E44AD",
        label: "Async/\nAwait",
    },
    Thumbnail {
        key: "js_dom",
        color: "#6C3483",
        label: "DOM\nManipulation",
    },
    Thumbnail {
        key: "react_hooks",
        color: "#3498DB",
        label: "React\nHooks",
    },
    Thumbnail {
        key: "css_layout",
        color: "#1ABC9C",
        label: "CSS\nLayout",
    },
];

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
#[error("Invalid hex color: {0:?}")]
pub struct InvalidHexColorError(String);

/// `#RRGGBB` color.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct HexColor(pub Rgb<u8>);

impl FromStr for HexColor {
    type Err = InvalidHexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidHexColorError(s.to_owned());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel =
            |range: Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
        Ok(Self(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?])))
    }
}

#[cfg(test)]
mod tests {
    use crate::palette::{HexColor, InvalidHexColorError, THUMBNAILS};
    use image::Rgb;
    use std::collections::HashSet;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(
            "#F39C12".parse::<HexColor>(),
            Ok(HexColor(Rgb([0xF3, 0x9C, 0x12])))
        );
        assert_eq!(
            "#1abc9c".parse::<HexColor>(),
            Ok(HexColor(Rgb([0x1A, 0xBC, 0x9C])))
        );

        for invalid in ["F39C12", "#F39C1", "#F39C123", "#GG9C12", "#+F9C12", "#F3ư12", ""] {
            assert_eq!(
                invalid.parse::<HexColor>(),
                Err(InvalidHexColorError(invalid.to_owned()))
            );
        }
    }

    #[test]
    fn thumbnails_are_well_formed() {
        let keys: HashSet<_> = THUMBNAILS.iter().map(|thumbnail| thumbnail.key).collect();
        assert_eq!(keys.len(), THUMBNAILS.len());

        for thumbnail in THUMBNAILS {
            assert!(thumbnail.color.parse::<HexColor>().is_ok(), "{}", thumbnail.key);
            assert_eq!(thumbnail.label.lines().count(), 2, "{}", thumbnail.key);
        }
    }
}
