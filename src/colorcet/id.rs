use std::{fmt, str::FromStr};
use crate::error::{Error, Result};

/// Family of a ColorCET colormap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorCETType {
    /// Maps whose two ends meet, for phase or angle data (`C`).
    Cyclic,
    /// Maps with a neutral center and contrasting ends (`D`).
    Diverging,
    /// Maps of constant lightness (`I`).
    Isoluminant,
    /// Maps with monotonic lightness (`L`).
    Linear,
    /// Rainbow maps with reasonably uniform perceptual steps (`R`).
    Rainbow,
}

impl ColorCETType {
    /// All families, in code-letter order.
    pub const ALL: [ColorCETType; 5] = [
        ColorCETType::Cyclic, ColorCETType::Diverging,
        ColorCETType::Isoluminant, ColorCETType::Linear,
        ColorCETType::Rainbow];

    /// Return the family designated by the code letter `c`.
    pub fn from_letter(c: char) -> Option<Self> {
        use ColorCETType::*;
        match c {
            'C' => Some(Cyclic),
            'D' => Some(Diverging),
            'I' => Some(Isoluminant),
            'L' => Some(Linear),
            'R' => Some(Rainbow),
            _ => None,
        }
    }

    /// The code letter of the family.
    pub fn letter(self) -> char {
        use ColorCETType::*;
        match self {
            Cyclic => 'C',
            Diverging => 'D',
            Isoluminant => 'I',
            Linear => 'L',
            Rainbow => 'R',
        }
    }

    /// Capitalized name, as used in display names.
    pub fn name(self) -> &'static str {
        use ColorCETType::*;
        match self {
            Cyclic => "Cyclic",
            Diverging => "Diverging",
            Isoluminant => "Isoluminant",
            Linear => "Linear",
            Rainbow => "Rainbow",
        }
    }
}

/// Modification of a base ColorCET map.  A map carries at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Colorblind safe, leading `CB` marker.
    #[cfg_attr(feature = "serde", serde(rename = "CB"))]
    Colorblind,
    /// Rotated by 25%, trailing `s`.
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    Shifted,
    /// High contrast, trailing `A`.
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    HighContrast,
}

impl Variant {
    /// Resolve the variant of a code from its leading `CB` marker and
    /// its trailing suffix letter.  The marker takes precedence over
    /// any suffix.
    pub fn resolve(cb_marker: bool, suffix: Option<char>) -> Option<Self> {
        if cb_marker { return Some(Variant::Colorblind) }
        match suffix {
            Some('s') => Some(Variant::Shifted),
            Some('A') => Some(Variant::HighContrast),
            _ => None,
        }
    }
}

/// Structured form of a ColorCET code such as `"CBC1"`, `"C3s"` or
/// `"D01A"`.
///
/// # Example
///
/// ```
/// use colorcet_catalog::{ColorCETIdentifier, ColorCETType, Variant};
/// let id: ColorCETIdentifier = "D01A".parse().unwrap();
/// assert_eq!(id, ColorCETIdentifier::new(ColorCETType::Diverging, 1)
///                    .with_variant(Variant::HighContrast));
/// assert_eq!(id.display_name(), "Diverging 1 (high contrast)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorCETIdentifier {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub typ: ColorCETType,
    pub id: u32,
    #[cfg_attr(feature = "serde",
               serde(default, skip_serializing_if = "Option::is_none"))]
    pub variant: Option<Variant>,
}

impl ColorCETIdentifier {
    /// Identifier of the plain map `typ` number `id`.
    pub const fn new(typ: ColorCETType, id: u32) -> Self {
        Self { typ, id, variant: None }
    }

    /// The same identifier with `variant` set.
    pub const fn with_variant(self, variant: Variant) -> Self {
        Self { variant: Some(variant), ..self }
    }

    /// Decode a ColorCET code.  Same as `code.parse()`.
    pub fn decode(code: &str) -> Result<Self> { code.parse() }

    /// Human readable name, e.g. `"Colorblind Cyclic 1"` or
    /// `"Cyclic 3 (shift 25%)"`.
    pub fn display_name(&self) -> String {
        let base = format!("{} {}", self.typ.name(), self.id);
        match self.variant {
            None => base,
            Some(Variant::Colorblind) => format!("Colorblind {base}"),
            Some(Variant::Shifted) => format!("{base} (shift 25%)"),
            Some(Variant::HighContrast) => format!("{base} (high contrast)"),
        }
    }

    /// Compact code of the identifier.  The number is written without
    /// zero padding so `"L03"` comes back as `"L3"`.
    pub fn code(&self) -> String {
        let (cb, suffix) = match self.variant {
            None => ("", ""),
            Some(Variant::Colorblind) => ("CB", ""),
            Some(Variant::Shifted) => ("", "s"),
            Some(Variant::HighContrast) => ("", "A"),
        };
        format!("{cb}{}{}{suffix}", self.typ.letter(), self.id)
    }
}

impl fmt::Display for ColorCETIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for ColorCETIdentifier {
    type Err = Error;

    /// Grammar: `["CB"] ("C"|"D"|"I"|"L"|"R") digit+ ["s"|"A"]`, the whole
    /// string being matched.  The number must be positive.
    fn from_str(code: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier(code.to_string());
        let (cb_marker, rest) = match code.strip_prefix("CB") {
            Some(rest) => (true, rest),
            None => (false, code),
        };
        let mut chars = rest.chars();
        let typ = chars.next().and_then(ColorCETType::from_letter)
            .ok_or_else(invalid)?;
        let rest = chars.as_str();
        let (digits, suffix) = match rest.strip_suffix(['s', 'A']) {
            Some(digits) => (digits, rest[digits.len()..].chars().next()),
            None => (rest, None),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid())
        }
        let id = digits.parse::<u32>().map_err(|_| invalid())?;
        if id == 0 { return Err(invalid()) }
        Ok(ColorCETIdentifier {
            typ, id, variant: Variant::resolve(cb_marker, suffix) })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use ColorCETType::*;

    fn id(typ: ColorCETType, n: u32, v: Option<Variant>) -> ColorCETIdentifier {
        ColorCETIdentifier { typ, id: n, variant: v }
    }

    #[test]
    fn decode_known_codes() {
        let cases = [
            ("C3", id(Cyclic, 3, None)),
            ("C3s", id(Cyclic, 3, Some(Variant::Shifted))),
            ("CBC1", id(Cyclic, 1, Some(Variant::Colorblind))),
            ("CBD1", id(Diverging, 1, Some(Variant::Colorblind))),
            ("CBL1", id(Linear, 1, Some(Variant::Colorblind))),
            ("D03", id(Diverging, 3, None)),
            ("D01A", id(Diverging, 1, Some(Variant::HighContrast))),
            ("I3", id(Isoluminant, 3, None)),
            ("L03", id(Linear, 3, None)),
            ("R3", id(Rainbow, 3, None)),
            ("L20", id(Linear, 20, None)),
        ];
        for (code, expected) in cases {
            assert_eq!(code.parse::<ColorCETIdentifier>(), Ok(expected),
                       "decoding {code}");
        }
    }

    #[test]
    fn colorblind_marker_beats_suffix() {
        assert_eq!(ColorCETIdentifier::decode("CBC2s"),
                   Ok(id(Cyclic, 2, Some(Variant::Colorblind))));
        assert_eq!(ColorCETIdentifier::decode("CBD1A"),
                   Ok(id(Diverging, 1, Some(Variant::Colorblind))));
        assert_eq!(Variant::resolve(true, Some('s')), Some(Variant::Colorblind));
        assert_eq!(Variant::resolve(false, Some('A')),
                   Some(Variant::HighContrast));
        assert_eq!(Variant::resolve(false, None), None);
    }

    #[test]
    fn decode_rejects_malformed_codes() {
        for code in ["", "C", "CB", "CBs", "X3", "c3", "C3x", "C3ss", "C3As",
                     "CET-C3", "C 3", " C3", "C3 ", "Cs", "CBB1", "C-3",
                     "C99999999999", "C0", "L00", "CBD0", "D000A"] {
            assert_eq!(code.parse::<ColorCETIdentifier>(),
                       Err(Error::InvalidIdentifier(code.to_string())),
                       "decoding {code:?}");
        }
    }

    #[test]
    fn display_names() {
        let cases = [
            (id(Cyclic, 3, None), "Cyclic 3"),
            (id(Cyclic, 3, Some(Variant::Shifted)), "Cyclic 3 (shift 25%)"),
            (id(Cyclic, 3, Some(Variant::Colorblind)), "Colorblind Cyclic 3"),
            (id(Diverging, 1, Some(Variant::Colorblind)),
             "Colorblind Diverging 1"),
            (id(Linear, 1, Some(Variant::Colorblind)), "Colorblind Linear 1"),
            (id(Diverging, 1, Some(Variant::HighContrast)),
             "Diverging 1 (high contrast)"),
            (id(Isoluminant, 3, None), "Isoluminant 3"),
            (id(Linear, 3, None), "Linear 3"),
            (id(Rainbow, 3, None), "Rainbow 3"),
        ];
        for (i, name) in cases {
            assert_eq!(i.display_name(), name);
            assert_eq!(i.to_string(), name);
        }
    }

    #[test]
    fn display_names_do_not_collide() {
        let variants = [None, Some(Variant::Colorblind), Some(Variant::Shifted),
                        Some(Variant::HighContrast)];
        let mut names = std::collections::HashSet::new();
        for typ in ColorCETType::ALL {
            for n in 1 ..= 20 {
                for v in variants {
                    assert!(names.insert(id(typ, n, v).display_name()));
                }
            }
        }
    }

    #[test]
    fn code_decodes_back() {
        let variants = [None, Some(Variant::Colorblind), Some(Variant::Shifted),
                        Some(Variant::HighContrast)];
        for typ in ColorCETType::ALL {
            for v in variants {
                let i = id(typ, 12, v);
                assert_eq!(i.code().parse(), Ok(i));
            }
        }
        assert_eq!(id(Linear, 3, None).code(), "L3");
        assert_eq!(id(Cyclic, 1, Some(Variant::Colorblind)).code(), "CBC1");
    }
}
