use std::collections::{BTreeMap, HashSet};
use std::io::Read;

use anyhow::Context;

use crate::foundation::core::{HexColor, Point};
use crate::foundation::error::{DrapeError, DrapeResult};

/// Size labels in the order they are offered to shoppers.
pub const STANDARD_SIZE_LABELS: [&str; 4] = ["S", "M", "L", "XL"];

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Top-level garment category.
pub enum Category {
    /// Shirts, tees, polos.
    Tops,
    /// Hoodies, jackets, blazers.
    Outerwear,
    /// Dresses.
    Dresses,
}

impl Category {
    /// Every category, in catalog display order.
    pub const ALL: [Category; 3] = [Category::Tops, Category::Outerwear, Category::Dresses];

    /// Lower-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Outerwear => "outerwear",
            Category::Dresses => "dresses",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DrapeError::validation(format!("unknown category \"{s}\"")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Fabric weight.
pub enum Thickness {
    /// Lightweight fabric.
    Light,
    /// Midweight fabric.
    Medium,
    /// Heavyweight fabric.
    Heavy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Cut of a garment, independent of its numeric size.
pub enum Fit {
    /// Close to the body.
    Slim,
    /// Standard cut.
    Regular,
    /// Deliberately loose.
    Oversized,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A color/imagery variant of a garment.
pub struct Colorway {
    /// Catalog-unique colorway id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Swatch color; also the overlay color used by the placeholder compositor.
    pub hex_code: HexColor,
    /// Product image URL (placeholder-service URL in the built-in catalog).
    pub image_url: String,
    /// Garment mask URL. Reserved: nothing in the render path reads it.
    pub mask_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Garment measurements in inches.
pub struct Size {
    /// Chest circumference.
    pub chest: f64,
    /// Body length.
    pub length: f64,
    /// Sleeve length (0 for sleeveless garments).
    pub sleeve: f64,
    /// Cut.
    pub fit: Fit,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Normalized 2-D garment landmarks. Carried as reference data only.
pub struct Landmarks {
    /// Neckline points.
    pub neckline: Vec<Point>,
    /// Hem points.
    pub hem: Vec<Point>,
    /// Sleeve points.
    pub sleeve: Vec<Point>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Image usage rights attached to a garment.
pub struct UsageRights {
    /// Usage class, e.g. `commercial`.
    pub usage: String,
    /// Free-form restrictions.
    #[serde(default)]
    pub restrictions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An immutable catalog garment record.
pub struct Garment {
    /// Catalog-unique id.
    pub id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Free-form subcategory, e.g. `polo-shirts`.
    pub subcategory: String,
    /// Brand name.
    pub brand: String,
    /// Price in store currency.
    pub price: f64,
    /// Material description.
    pub material: String,
    /// Fabric weight.
    pub thickness: Thickness,
    /// Whether the fabric stretches.
    pub stretch: bool,
    /// Ordered colorways; the first is the default.
    pub colorways: Vec<Colorway>,
    /// Ordered size variants; index 1 is the default ("medium" by convention).
    pub sizes: Vec<Size>,
    /// Reference landmarks.
    #[serde(default)]
    pub landmarks: Landmarks,
    /// Size label to measurements.
    #[serde(default)]
    pub size_chart: BTreeMap<String, Size>,
    /// Usage rights.
    #[serde(default)]
    pub rights: UsageRights,
}

impl Garment {
    /// Colorway selected when the garment is picked: the first one.
    pub fn default_colorway(&self) -> Option<&Colorway> {
        self.colorways.first()
    }

    /// Size selected when the garment is picked: the second entry of `sizes`.
    ///
    /// This is positional, not a label lookup.
    pub fn default_size(&self) -> Option<&Size> {
        self.sizes.get(1)
    }

    /// Look up a colorway of this garment by id.
    pub fn colorway(&self, id: &str) -> Option<&Colorway> {
        self.colorways.iter().find(|c| c.id == id)
    }

    /// Look up a size chart entry by label (`S`, `M`, ...), case-insensitively.
    pub fn size_for_label(&self, label: &str) -> Option<&Size> {
        self.size_chart
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(label.trim()))
            .map(|(_, v)| v)
    }

    /// Size chart labels: standard labels first in S/M/L/XL order, then any others sorted.
    pub fn size_labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = STANDARD_SIZE_LABELS
            .into_iter()
            .filter(|l| self.size_chart.contains_key(*l))
            .collect();
        out.extend(
            self.size_chart
                .keys()
                .map(String::as_str)
                .filter(|k| !STANDARD_SIZE_LABELS.contains(k)),
        );
        out
    }

    /// Chart label whose measurements match `size`, if any.
    pub fn label_for_size(&self, size: &Size) -> Option<&str> {
        self.size_labels()
            .into_iter()
            .find(|l| self.size_chart.get(*l) == Some(size))
    }

    fn validate(&self) -> DrapeResult<()> {
        if self.id.trim().is_empty() {
            return Err(DrapeError::catalog("garment id must be non-empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DrapeError::catalog(format!(
                "garment '{}' price must be finite and >= 0",
                self.id
            )));
        }
        if self.colorways.is_empty() {
            return Err(DrapeError::catalog(format!(
                "garment '{}' must have at least one colorway",
                self.id
            )));
        }
        if self.sizes.is_empty() {
            return Err(DrapeError::catalog(format!(
                "garment '{}' must have at least one size",
                self.id
            )));
        }
        for size in self.sizes.iter().chain(self.size_chart.values()) {
            for (name, value) in [
                ("chest", size.chest),
                ("length", size.length),
                ("sleeve", size.sleeve),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(DrapeError::catalog(format!(
                        "garment '{}' size {name} must be finite and >= 0",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A versioned, read-only garment collection.
///
/// Loading is synchronous and complete: a catalog either parses and validates in full or the
/// load fails.
pub struct Catalog {
    /// Schema/content version of the collection.
    pub version: u32,
    garments: Vec<Garment>,
}

impl Catalog {
    /// Build and validate a catalog from in-memory records.
    pub fn new(version: u32, garments: Vec<Garment>) -> DrapeResult<Self> {
        let catalog = Self { version, garments };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate (seven garments).
    pub fn builtin() -> DrapeResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json_str(json: &str) -> DrapeResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog JSON document from a reader.
    pub fn from_reader(mut reader: impl Read) -> DrapeResult<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .context("read catalog document")?;
        Self::from_json_str(&json)
    }

    /// Check record-level and cross-record invariants.
    pub fn validate(&self) -> DrapeResult<()> {
        let mut garment_ids = HashSet::new();
        let mut colorway_ids = HashSet::new();
        for garment in &self.garments {
            garment.validate()?;
            if !garment_ids.insert(garment.id.as_str()) {
                return Err(DrapeError::catalog(format!(
                    "duplicate garment id '{}'",
                    garment.id
                )));
            }
            for colorway in &garment.colorways {
                if colorway.id.trim().is_empty() {
                    return Err(DrapeError::catalog(format!(
                        "garment '{}' has a colorway with an empty id",
                        garment.id
                    )));
                }
                if !colorway_ids.insert(colorway.id.as_str()) {
                    return Err(DrapeError::catalog(format!(
                        "duplicate colorway id '{}'",
                        colorway.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// All garments in catalog order.
    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    /// Number of garments.
    pub fn len(&self) -> usize {
        self.garments.len()
    }

    /// Return `true` when the catalog holds no garments.
    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
