//! # lespro-core
//!
//! Data and logic behind the ЛесПром landing page.
//!
//! The page itself is a Leptos CSR app (the `lespro-landing` crate); this
//! crate holds everything that does not touch the DOM, so it can be tested
//! on the host target:
//!
//! - [`catalog`] - the immutable list of lumber materials and lookup by name
//! - [`calculator`] - the price calculator state machine
//! - [`format`] - ru-RU style number and price display
//! - [`navigation`] - page sections and nav-label to section-id mapping
//! - [`content`] - every hardcoded text block on the page
//! - [`structured_data`] - schema.org JSON-LD export of the catalog
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lespro_core::{Calculator, Catalog};
//!
//! let catalog = Arc::new(Catalog::lespro());
//! let mut calc = Calculator::new(catalog);
//!
//! calc.select_material("Доска обрезная");
//! calc.set_volume("2");
//! calc.calculate().unwrap();
//!
//! assert_eq!(calc.current_total(), Some(17000.0));
//! ```

#![warn(missing_docs)]

pub mod calculator;
pub mod catalog;
pub mod content;
pub mod error;
pub mod format;
pub mod navigation;
pub mod structured_data;

pub use calculator::{Calculation, Calculator, Quote, SkipReason, price_for};
pub use catalog::{Catalog, Material};
pub use error::{CalculatorError, CatalogError};
pub use navigation::Section;
