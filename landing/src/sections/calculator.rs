use std::sync::Arc;

use leptos::prelude::*;
use lespro_core::content::CALCULATOR_HEADER;
use lespro_core::format::{self, price_per_unit, rubles};
use lespro_core::{Calculation, Calculator, Catalog, Section};
use tracing::{debug, warn};

use crate::components::{Icon, SectionHeading};

#[component]
pub fn CalculatorSection(catalog: Arc<Catalog>) -> impl IntoView {
    let calc = RwSignal::new(Calculator::new(Arc::clone(&catalog)));
    let (volume_invalid, set_volume_invalid) = signal(false);
    let ready = Memo::new(move |_| calc.with(Calculator::is_ready));

    let options = catalog
        .iter()
        .map(|material| {
            let label = format!("{} - {}", material.name, price_per_unit(material));
            view! { <option value=material.name.clone()>{label}</option> }
        })
        .collect_view();

    let on_calculate = move |_| match calc.try_update(Calculator::calculate) {
        Some(Ok(Calculation::Computed(quote))) => {
            set_volume_invalid.set(false);
            debug!(total = quote.total, "quote shown");
        }
        Some(Ok(Calculation::Skipped(reason))) => debug!(?reason, "calculation skipped"),
        Some(Err(err)) => {
            warn!(%err, "calculation rejected");
            set_volume_invalid.set(true);
        }
        None => {}
    };

    view! {
        <section id=Section::Calculator.id() class="calculator">
            <div class="container container-narrow">
                <SectionHeading header=&CALCULATOR_HEADER />

                <div class="card calc-card">
                    <div class="card-header">
                        <h3 class="card-title">
                            <Icon name="calculator" size=24 />
                            "Расчёт стоимости пиломатериалов"
                        </h3>
                    </div>
                    <div class="card-content calc-form">
                        <div class="field">
                            <label for="material" class="label">"Выберите тип материала"</label>
                            <select
                                id="material"
                                class="select"
                                on:change=move |ev| {
                                    let name = event_target_value(&ev);
                                    calc.update(|c| c.select_material(name));
                                }
                            >
                                <option value="" disabled=true selected=true>"Выберите материал"</option>
                                {options}
                            </select>
                        </div>

                        <div class="field">
                            <label for="volume" class="label">"Объём (м³)"</label>
                            // Left uncontrolled: a number input reports "" for partial
                            // text such as "-" or "1e", and writing that back clears it.
                            <input
                                id="volume"
                                class="input"
                                type="number"
                                placeholder="Введите объём"
                                step="0.1"
                                min="0"
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    set_volume_invalid.set(false);
                                    calc.update(|c| c.set_volume(text));
                                }
                            />
                            <Show when=move || volume_invalid.get()>
                                <p class="field-error">"Введите объём числом, например 2 или 0.5"</p>
                            </Show>
                        </div>

                        <button
                            type="button"
                            class="btn btn-secondary btn-block"
                            disabled=move || !ready.get()
                            on:click=on_calculate
                        >
                            <Icon name="calculator" class="mr-2" />
                            "Рассчитать стоимость"
                        </button>

                        {move || {
                            calc.with(|c| c.last_quote().cloned())
                                .map(|quote| {
                                    let caption = format!(
                                        "{} • {}",
                                        quote.material,
                                        format::volume(quote.volume, &quote.unit),
                                    );
                                    view! {
                                        <div class="calc-result">
                                            <div class="calc-result-row">
                                                <span class="calc-result-label">"Итоговая стоимость:"</span>
                                                <span class="calc-result-total">{rubles(quote.total)}</span>
                                            </div>
                                            <p class="calc-result-caption">{caption}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
