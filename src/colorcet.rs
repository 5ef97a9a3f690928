//! ColorCET colormaps.
//!
//! A [`Catalog`] is built once from the raw `CET-*.csv` tables (handed
//! over as strings by whoever bundles or reads the assets) and is
//! read-only afterwards.

use std::{collections::HashSet, fmt};
use log::{debug, info};
use rgb::RGB;
use crate::error::{Error, Result};
use crate::{ColorRange, RGBColor};

mod id;
pub use id::{ColorCETIdentifier, ColorCETType, Variant};

/// Identifier of the table the 50% shifted map is derived from.
pub const SHIFT50_BASE: ColorCETIdentifier =
    ColorCETIdentifier::new(ColorCETType::Cyclic, 3);

/// Identity of a catalog entry.
///
/// Maps read from a table carry their decoded identifier.  The map
/// rotated by 50% has no ColorCET code, so its identity is distinct
/// from every decoded identifier, its base table's included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MapId {
    /// Map read from the table with this code.
    Decoded(ColorCETIdentifier),
    /// Map `base` rotated by half its length.
    Shift50 { base: ColorCETIdentifier },
}

impl MapId {
    /// The decoded identifier, `None` for derived maps.
    pub fn decoded(&self) -> Option<&ColorCETIdentifier> {
        match self {
            MapId::Decoded(id) => Some(id),
            MapId::Shift50 { .. } => None,
        }
    }

    /// Identifier of the table the colors come from.
    pub fn base(&self) -> &ColorCETIdentifier {
        match self {
            MapId::Decoded(id) | MapId::Shift50 { base: id } => id,
        }
    }

    /// Whether the map was synthesized from another table.
    pub fn is_derived(&self) -> bool { matches!(self, MapId::Shift50 { .. }) }

    /// Human readable name, e.g. `"Cyclic 3 (shift 50%)"`.
    pub fn display_name(&self) -> String {
        match self {
            MapId::Decoded(id) => id.display_name(),
            MapId::Shift50 { base } => format!("{base} (shift 50%)"),
        }
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<ColorCETIdentifier> for MapId {
    fn from(id: ColorCETIdentifier) -> Self { MapId::Decoded(id) }
}

/// A named ColorCET colormap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorCETMap {
    id: MapId,
    #[cfg_attr(feature = "serde", serde(rename = "displayName"))]
    display_name: String,
    colors: Vec<RGB<f64>>, // Invariant: not empty
}

impl ColorCETMap {
    fn new(id: MapId, colors: Vec<RGB<f64>>) -> Self {
        ColorCETMap { id, display_name: id.display_name(), colors }
    }

    /// Identity of the map within the catalog.
    pub fn id(&self) -> &MapId { &self.id }

    /// Whether the map was synthesized from another table.
    pub fn is_derived(&self) -> bool { self.id.is_derived() }

    /// Name shown in a colormap selector.
    pub fn display_name(&self) -> &str { &self.display_name }

    /// The ramp, each component in \[0, 1\].
    pub fn colors(&self) -> &[RGB<f64>] { &self.colors }

    /// Number of colors of the ramp.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false`: tables without rows are rejected.
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The ramp converted to the color type `C`.
    pub fn colors_as<C: RGBColor>(&self) -> Vec<C> {
        self.colors.iter().map(|&c| C::from_rgb(c)).collect()
    }

    /// Flattened 8-bit RGB values, the layout of a 1-D lookup texture.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        self.colors_as::<rgb::RGB8>().iter()
            .flat_map(|c| [c.r, c.g, c.b])
            .collect()
    }

    /// Colors of `self` rotated by half its length: the second half of
    /// the rows followed by the first.
    fn shift50(&self) -> ColorCETMap {
        let half = self.colors.len() / 2;
        let colors = self.colors[half ..].iter()
            .chain(&self.colors[.. half])
            .copied()
            .collect();
        ColorCETMap::new(MapId::Shift50 { base: *self.id.base() }, colors)
    }
}

impl<Color: RGBColor> ColorRange<Color> for ColorCETMap {
    /// Linear interpolation between the two ramp entries surrounding
    /// `t`.
    fn rgb(&self, t: f64) -> Color {
        let last = self.colors.len() - 1;
        let x = t.clamp(0., 1.) * last as f64;
        let i = x.trunc() as usize;
        if i >= last {
            return Color::from_rgb(self.colors[last])
        }
        let s = x.fract();
        let c0 = self.colors[i];
        let c1 = self.colors[i + 1];
        Color::from_rgb(RGB { r: c0.r + s * (c1.r - c0.r),
                              g: c0.g + s * (c1.g - c0.g),
                              b: c0.b + s * (c1.b - c0.b) })
    }
}

/// Extract the ColorCET code from a table key such as `"CET-C3s"` or
/// `"lib/colorcet-maps/CET-C3s.csv"`.
fn code_of_key(key: &str) -> &str {
    let name = key.rsplit(['/', '\\']).next().unwrap_or(key);
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    stem.rsplit('-').next().unwrap_or(stem)
}

/// Parse lines "R,G,B" with integer channels in 0..=255.
fn parse_table(key: &str, csv: &str) -> Result<Vec<RGB<f64>>> {
    let malformed = |line: usize, reason: String| Error::MalformedTable {
        key: key.to_string(), line, reason };
    let mut colors = Vec::new();
    for (i, line) in csv.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue }
        let mut rgb = [0.; 3];
        let mut fields = line.split(',');
        for c in rgb.iter_mut() {
            let field = fields.next().ok_or_else(
                || malformed(i + 1, format!("expected 3 channels in {line:?}")))?;
            let v: u8 = field.trim().parse().map_err(
                |_| malformed(i + 1, format!("channel {field:?} not in 0..=255")))?;
            *c = v as f64 / 255.;
        }
        if fields.next().is_some() {
            return Err(malformed(i + 1,
                                 format!("more than 3 channels in {line:?}")))
        }
        colors.push(RGB { r: rgb[0], g: rgb[1], b: rgb[2] });
    }
    if colors.is_empty() {
        return Err(malformed(0, "no colors".to_string()))
    }
    Ok(colors)
}

/// The ColorCET colormaps, sorted by display name.
///
/// # Example
///
/// ```
/// use colorcet_catalog::{Catalog, ColorCETIdentifier};
/// let catalog = Catalog::build([
///     ("CET-C3", "255,0,0\n0,255,0\n0,0,255\n255,255,255\n"),
///     ("CET-L03", "0,0,0\n255,255,255\n"),
/// ]).unwrap();
/// let names: Vec<_> = catalog.iter().map(|m| m.display_name()).collect();
/// assert_eq!(names, ["Cyclic 3", "Cyclic 3 (shift 50%)", "Linear 3"]);
/// let l3 = ColorCETIdentifier::decode("L3").unwrap();
/// assert_eq!(catalog.find(&l3).unwrap().len(), 2);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    maps: Vec<ColorCETMap>,
}

impl Catalog {
    /// Build the catalog from `(key, csv)` pairs.  Every key must end
    /// with a ColorCET code (see [`ColorCETIdentifier`]), optionally
    /// followed by a file extension.  The table [`SHIFT50_BASE`] must be
    /// present; a copy of it rotated by 50% is added to the catalog.
    ///
    /// Any undecodable key, malformed table, duplicate identifier or
    /// missing base table makes the whole build fail.
    pub fn build<K, V>(tables: impl IntoIterator<Item = (K, V)>)
                       -> Result<Self>
    where K: AsRef<str>, V: AsRef<str> {
        let mut maps = Vec::new();
        let mut seen = HashSet::new();
        for (key, csv) in tables {
            let key = key.as_ref();
            let id: ColorCETIdentifier = code_of_key(key).parse()?;
            if !seen.insert(id) {
                return Err(Error::DuplicateIdentifier {
                    code: id.code(), key: key.to_string() })
            }
            let colors = parse_table(key, csv.as_ref())?;
            debug!("colorcet: {key} -> {id} ({} colors)", colors.len());
            maps.push(ColorCETMap::new(MapId::Decoded(id), colors));
        }
        let shifted = maps.iter()
            .find(|m| m.id == MapId::Decoded(SHIFT50_BASE))
            .map(ColorCETMap::shift50)
            .ok_or_else(|| Error::MissingBaseTable(SHIFT50_BASE.code()))?;
        maps.push(shifted);
        maps.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        info!("colorcet: catalog of {} colormaps", maps.len());
        Ok(Catalog { maps })
    }

    /// Return the map with exactly this identifier (variant included).
    ///
    /// Derived maps are never returned: the 50% shifted map can only be
    /// reached through [`Catalog::find_by_name`].
    pub fn find(&self, id: &ColorCETIdentifier) -> Option<&ColorCETMap> {
        self.maps.iter().find(|m| m.id.decoded() == Some(id))
    }

    /// Return the map whose display name is `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ColorCETMap> {
        self.maps.iter().find(|m| m.display_name == name)
    }

    /// Maps of the family `typ`, in catalog order.
    pub fn of_type(&self, typ: ColorCETType)
                   -> impl Iterator<Item = &ColorCETMap> {
        self.maps.iter().filter(move |m| m.id.base().typ == typ)
    }

    /// Iterate over the maps in display name order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorCETMap> {
        self.maps.iter()
    }

    /// Number of maps, the derived one included.
    pub fn len(&self) -> usize { self.maps.len() }

    /// Always `false` for a built catalog.
    pub fn is_empty(&self) -> bool { self.maps.is_empty() }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ColorCETMap;
    type IntoIter = std::slice::Iter<'a, ColorCETMap>;

    fn into_iter(self) -> Self::IntoIter { self.maps.iter() }
}
