//! Price calculator: material selection x volume = total.
//!
//! [`Calculator`] owns the transient form state (selected material name,
//! raw volume text, last quote) and one transition, [`Calculator::calculate`].
//! The quote is a snapshot: editing the inputs afterwards does not touch it
//! until the next successful calculation, and nothing ever resets it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{Catalog, Material};
use crate::error::CalculatorError;

/// Total price of `volume` units of `material`.
pub fn price_for(material: &Material, volume: f64) -> f64 {
    material.price_per_unit_volume * volume
}

/// Result of the last successful calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    /// Material the quote was computed for
    pub material: String,
    /// Unit label of that material
    pub unit: String,
    /// Parsed volume
    pub volume: f64,
    /// `price_per_unit_volume * volume`
    pub total: f64,
}

/// Why a calculation request left the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No material has been selected yet
    NoSelection,
    /// The selected name is not in the catalog
    UnknownMaterial(String),
    /// The volume field is empty
    EmptyVolume,
}

/// Outcome of [`Calculator::calculate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Calculation {
    /// A new quote was stored
    Computed(Quote),
    /// Inputs were not ready; the previous quote (if any) is kept
    Skipped(SkipReason),
}

/// Calculator state bound to a shared, read-only catalog.
#[derive(Clone, Debug)]
pub struct Calculator {
    catalog: Arc<Catalog>,
    selected_material: String,
    volume_text: String,
    last_quote: Option<Quote>,
}

impl Calculator {
    /// Empty calculator (no selection, empty volume, no result).
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected_material: String::new(),
            volume_text: String::new(),
            last_quote: None,
        }
    }

    /// Store the selected material name. The name is not checked against
    /// the catalog here; an unknown name makes `calculate` a no-op.
    pub fn select_material(&mut self, name: impl Into<String>) {
        self.selected_material = name.into();
        debug!(material = %self.selected_material, "material selected");
    }

    /// Store the raw volume text verbatim, including partial input.
    pub fn set_volume(&mut self, text: impl Into<String>) {
        self.volume_text = text.into();
        debug!(volume = %self.volume_text, "volume changed");
    }

    /// Raw name of the current selection (empty when nothing is selected).
    pub fn selected_name(&self) -> &str {
        &self.selected_material
    }

    /// Catalog entry for the current selection, if the name resolves.
    pub fn current_selection(&self) -> Option<&Material> {
        self.catalog.find(&self.selected_material)
    }

    /// Raw volume text as entered.
    pub fn current_volume_text(&self) -> &str {
        &self.volume_text
    }

    /// Total of the last successful calculation.
    pub fn current_total(&self) -> Option<f64> {
        self.last_quote.as_ref().map(|q| q.total)
    }

    /// Full snapshot of the last successful calculation.
    pub fn last_quote(&self) -> Option<&Quote> {
        self.last_quote.as_ref()
    }

    /// Both inputs are filled in. The page disables the calculate button
    /// otherwise.
    pub fn is_ready(&self) -> bool {
        !self.selected_material.is_empty() && !self.volume_text.is_empty()
    }

    /// Price the current selection and volume.
    ///
    /// Missing or unknown selection and empty volume return
    /// [`Calculation::Skipped`] and keep the previous quote. Volume text
    /// that is not a finite number is rejected with
    /// [`CalculatorError::InvalidVolume`], and a volume whose total does not
    /// fit in an `f64` with [`CalculatorError::TotalOutOfRange`]; both keep
    /// the previous quote.
    pub fn calculate(&mut self) -> Result<Calculation, CalculatorError> {
        if self.selected_material.is_empty() {
            return Ok(Calculation::Skipped(SkipReason::NoSelection));
        }
        let Some(material) = self.catalog.find(&self.selected_material) else {
            debug!(material = %self.selected_material, "unknown material, skipping");
            return Ok(Calculation::Skipped(SkipReason::UnknownMaterial(
                self.selected_material.clone(),
            )));
        };
        if self.volume_text.is_empty() {
            return Ok(Calculation::Skipped(SkipReason::EmptyVolume));
        }

        let volume = match parse_volume(&self.volume_text) {
            Ok(volume) => volume,
            Err(err) => {
                warn!(volume = %self.volume_text, "rejected volume input");
                return Err(err);
            }
        };

        let total = price_for(material, volume);
        if !total.is_finite() {
            warn!(volume = %self.volume_text, "total out of range");
            return Err(CalculatorError::TotalOutOfRange {
                text: self.volume_text.clone(),
            });
        }

        let quote = Quote {
            material: material.name.clone(),
            unit: material.unit.clone(),
            volume,
            total,
        };
        debug!(material = %quote.material, volume, total = quote.total, "price calculated");
        self.last_quote = Some(quote.clone());
        Ok(Calculation::Computed(quote))
    }
}

/// Parse volume text as a finite floating-point number, ignoring
/// surrounding whitespace.
pub fn parse_volume(text: &str) -> Result<f64, CalculatorError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalculatorError::InvalidVolume {
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn calculator() -> Calculator {
        Calculator::new(Arc::new(Catalog::lespro()))
    }

    #[test]
    fn starts_empty() {
        let calc = calculator();
        assert_eq!(calc.selected_name(), "");
        assert_eq!(calc.current_volume_text(), "");
        assert!(calc.current_selection().is_none());
        assert!(calc.current_total().is_none());
        assert!(!calc.is_ready());
    }

    #[test]
    fn stores_inputs_verbatim() {
        let mut calc = calculator();
        calc.select_material("Несуществующий");
        calc.set_volume("1.");
        assert_eq!(calc.selected_name(), "Несуществующий");
        assert_eq!(calc.current_volume_text(), "1.");
        assert!(calc.current_selection().is_none());
        assert!(calc.is_ready());
    }

    #[test]
    fn holds_partial_number_input() {
        let mut calc = calculator();
        calc.select_material("Вагонка");
        for partial in ["-", "1e", "0.", "-0"] {
            calc.set_volume(partial);
            assert_eq!(calc.current_volume_text(), partial);
            assert!(calc.is_ready());
        }
    }

    #[test]
    fn computed_quote_snapshots_inputs() {
        let mut calc = calculator();
        calc.select_material("Блок-хаус");
        calc.set_volume("3");
        let outcome = calc.calculate().unwrap();
        let expected = Quote {
            material: "Блок-хаус".into(),
            unit: "м³".into(),
            volume: 3.0,
            total: 43500.0,
        };
        assert_eq!(outcome, Calculation::Computed(expected.clone()));
        assert_eq!(calc.last_quote(), Some(&expected));
    }

    #[test]
    fn skip_reasons() {
        let mut calc = calculator();
        assert_eq!(
            calc.calculate().unwrap(),
            Calculation::Skipped(SkipReason::NoSelection)
        );

        calc.select_material("Фанера");
        calc.set_volume("2");
        assert_eq!(
            calc.calculate().unwrap(),
            Calculation::Skipped(SkipReason::UnknownMaterial("Фанера".into()))
        );

        calc.select_material("Вагонка");
        calc.set_volume("");
        assert_eq!(
            calc.calculate().unwrap(),
            Calculation::Skipped(SkipReason::EmptyVolume)
        );
        assert!(calc.current_total().is_none());
    }

    #[test]
    fn parse_volume_accepts_numbers() {
        assert_eq!(parse_volume("2").unwrap(), 2.0);
        assert_eq!(parse_volume("0.5").unwrap(), 0.5);
        assert_eq!(parse_volume(" 1.25 ").unwrap(), 1.25);
        assert_eq!(parse_volume("1e2").unwrap(), 100.0);
        assert_eq!(parse_volume(".5").unwrap(), 0.5);
    }

    #[test]
    fn parse_volume_rejects_non_finite_and_garbage() {
        for text in ["abc", "NaN", "inf", "-inf", "2abc", "1,5", " "] {
            assert_eq!(
                parse_volume(text),
                Err(CalculatorError::InvalidVolume { text: text.into() }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let mut calc = calculator();
        calc.select_material("Блок-хаус");
        calc.set_volume("1e305");
        assert_eq!(
            calc.calculate(),
            Err(CalculatorError::TotalOutOfRange {
                text: "1e305".into()
            })
        );
        assert!(calc.last_quote().is_none());
    }

    #[test]
    fn price_for_multiplies() {
        let material = Material::new("Брус", 9200.0, "м³");
        assert_eq!(price_for(&material, 0.0), 0.0);
        assert_eq!(price_for(&material, 10.0), 92000.0);
    }
}
