//! Lumber catalog: an ordered, read-only list of materials.
//!
//! The catalog is built once from a fixed list of `(name, price, unit)`
//! triples and then shared by reference (usually via `Arc<Catalog>`).
//! There are no mutation operations.

use std::collections::HashSet;

use crate::error::CatalogError;

/// Unit label used by every entry of the built-in catalog.
pub const CUBIC_METER: &str = "м³";

/// Built-in ЛесПром price list, rubles per cubic meter.
pub const LESPROM_MATERIALS: &[(&str, f64, &str)] = &[
    ("Доска обрезная", 8500.0, CUBIC_METER),
    ("Брус строительный", 9200.0, CUBIC_METER),
    ("Вагонка", 12000.0, CUBIC_METER),
    ("Блок-хаус", 14500.0, CUBIC_METER),
    ("Имитация бруса", 13000.0, CUBIC_METER),
    ("Половая доска", 11000.0, CUBIC_METER),
];

/// A single catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Display name, unique within the catalog (used as the selection key)
    pub name: String,
    /// Price in rubles per one `unit` of volume
    pub price_per_unit_volume: f64,
    /// Unit label shown next to prices, e.g. `"м³"`
    pub unit: String,
}

impl Material {
    /// Create a catalog entry. Validation happens in [`Catalog::new`].
    pub fn new(name: impl Into<String>, price_per_unit_volume: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_per_unit_volume,
            unit: unit.into(),
        }
    }
}

/// Ordered, immutable material list.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    materials: Vec<Material>,
}

impl Catalog {
    /// Build a catalog, checking that names are non-empty and unique and
    /// that every price is a positive finite number.
    pub fn new(materials: Vec<Material>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(materials.len());
        for (index, material) in materials.iter().enumerate() {
            if material.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(material.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: material.name.clone(),
                });
            }
            let price = material.price_per_unit_volume;
            if !price.is_finite() || price <= 0.0 {
                return Err(CatalogError::InvalidPrice {
                    name: material.name.clone(),
                    price,
                });
            }
        }
        Ok(Self { materials })
    }

    /// Build a catalog from `(name, price, unit)` triples.
    pub fn from_triples(triples: &[(&str, f64, &str)]) -> Result<Self, CatalogError> {
        Self::new(
            triples
                .iter()
                .map(|&(name, price, unit)| Material::new(name, price, unit))
                .collect(),
        )
    }

    /// The built-in ЛесПром catalog ([`LESPROM_MATERIALS`]).
    pub fn lespro() -> Self {
        // The constant list is known-valid; the test suite checks it.
        Self {
            materials: LESPROM_MATERIALS
                .iter()
                .map(|&(name, price, unit)| Material::new(name, price, unit))
                .collect(),
        }
    }

    /// All materials in display order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Iterate materials in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Look a material up by its exact name. A miss is `None`, not an error.
    pub fn find(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::lespro()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
