//! Behavioral checks for the price calculator against the built-in catalog.

use std::sync::Arc;

use lespro_core::format::rubles;
use lespro_core::{Calculation, Calculator, CalculatorError, Catalog, SkipReason};

fn calculator() -> Calculator {
    Calculator::new(Arc::new(Catalog::lespro()))
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn total_is_price_times_volume_for_every_material() {
    let catalog = Arc::new(Catalog::lespro());
    let volumes = [0.1, 0.5, 1.0, 2.0, 3.75, 10.0, 123.456, 1e6];

    for material in catalog.iter() {
        for volume in volumes {
            let mut calc = Calculator::new(Arc::clone(&catalog));
            calc.select_material(material.name.clone());
            calc.set_volume(volume.to_string());
            calc.calculate().unwrap();

            let total = calc.current_total().expect("computed");
            let expected = material.price_per_unit_volume * volume;
            assert!(
                approx_eq(total, expected),
                "{} x {volume}: {total} != {expected}",
                material.name
            );
        }
    }
}

#[test]
fn no_selection_leaves_total_absent() {
    let mut calc = calculator();
    calc.set_volume("2");
    assert_eq!(
        calc.calculate(),
        Ok(Calculation::Skipped(SkipReason::NoSelection))
    );
    assert_eq!(calc.current_total(), None);
}

#[test]
fn empty_volume_leaves_total_unchanged() {
    let mut calc = calculator();
    calc.select_material("Доска обрезная");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), None);

    calc.set_volume("2");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(17000.0));

    calc.set_volume("");
    assert_eq!(
        calc.calculate(),
        Ok(Calculation::Skipped(SkipReason::EmptyVolume))
    );
    assert_eq!(calc.current_total(), Some(17000.0));
}

#[test]
fn unknown_material_is_a_no_op() {
    let mut calc = calculator();
    calc.select_material("Фанера");
    calc.set_volume("3");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), None);

    calc.select_material("Вагонка");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(36000.0));

    calc.select_material("Фанера");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(36000.0));
}

#[test]
fn edged_board_two_cubic_meters() {
    let mut calc = calculator();
    calc.select_material("Доска обрезная");
    calc.set_volume("2");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(17000.0));
    assert_eq!(rubles(17000.0), "17\u{a0}000\u{a0}₽");
}

#[test]
fn lining_half_cubic_meter() {
    let mut calc = calculator();
    calc.select_material("Вагонка");
    calc.set_volume("0.5");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(6000.0));
}

#[test]
fn non_numeric_volume_is_rejected_and_state_kept() {
    let mut calc = calculator();
    calc.select_material("Брус строительный");
    calc.set_volume("abc");
    assert_eq!(
        calc.calculate(),
        Err(CalculatorError::InvalidVolume { text: "abc".into() })
    );
    assert_eq!(calc.current_total(), None);

    calc.set_volume("1");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(9200.0));

    calc.set_volume("abc");
    assert!(calc.calculate().is_err());
    assert_eq!(calc.current_total(), Some(9200.0));
    // raw text is still held for the input field
    assert_eq!(calc.current_volume_text(), "abc");
}

#[test]
fn overflowing_volume_is_rejected_and_state_kept() {
    let mut calc = calculator();
    calc.select_material("Блок-хаус");
    calc.set_volume("2");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(29000.0));

    calc.set_volume("1e305");
    assert_eq!(
        calc.calculate(),
        Err(CalculatorError::TotalOutOfRange {
            text: "1e305".into()
        })
    );
    assert_eq!(calc.current_total(), Some(29000.0));
    assert!(calc.current_total().is_some_and(f64::is_finite));
}

#[test]
fn calculate_is_idempotent() {
    let mut calc = calculator();
    calc.select_material("Имитация бруса");
    calc.set_volume("1.5");
    let first = calc.calculate().unwrap();
    let second = calc.calculate().unwrap();
    assert_eq!(first, second);
    assert_eq!(calc.current_total(), Some(19500.0));
}

#[test]
fn total_goes_stale_until_recalculated() {
    let mut calc = calculator();
    calc.select_material("Половая доска");
    calc.set_volume("2");
    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(22000.0));

    calc.select_material("Блок-хаус");
    calc.set_volume("4");
    assert_eq!(calc.current_total(), Some(22000.0));
    assert_eq!(calc.last_quote().unwrap().material, "Половая доска");

    calc.calculate().unwrap();
    assert_eq!(calc.current_total(), Some(58000.0));
}

#[test]
fn ready_gate_matches_button_state() {
    let mut calc = calculator();
    assert!(!calc.is_ready());
    calc.select_material("Вагонка");
    assert!(!calc.is_ready());
    calc.set_volume("1");
    assert!(calc.is_ready());
    calc.set_volume("");
    assert!(!calc.is_ready());
}

#[test]
fn custom_catalog_is_injected() {
    let catalog = Catalog::from_triples(&[("Фанера", 500.0, "лист")]).unwrap();
    let mut calc = Calculator::new(Arc::new(catalog));
    calc.select_material("Фанера");
    calc.set_volume("4");
    let Ok(Calculation::Computed(quote)) = calc.calculate() else {
        panic!("expected a quote");
    };
    assert_eq!(quote.total, 2000.0);
    assert_eq!(quote.unit, "лист");

    calc.select_material("Вагонка");
    assert!(matches!(
        calc.calculate(),
        Ok(Calculation::Skipped(SkipReason::UnknownMaterial(_)))
    ));
}
