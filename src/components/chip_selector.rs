//! Horizontally scrollable row of selectable chips.
//!
//! DESIGN
//! ======
//! Fully controlled: the caller owns the options and the selected value, and
//! a click only reports the chip's value through `on_change`. The component
//! never writes selection state itself.

#[cfg(test)]
#[path = "chip_selector_test.rs"]
mod chip_selector_test;

use leptos::prelude::*;

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chip {
    /// Display text.
    pub label: String,
    /// Identifier reported through `on_change`.
    pub value: String,
}

impl Chip {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Pair each chip with whether it matches `current` exactly.
pub fn chip_states<'a>(
    options: &'a [Chip],
    current: &'a str,
) -> impl Iterator<Item = (&'a Chip, bool)> + 'a {
    options.iter().map(move |chip| (chip, chip.value == current))
}

/// Report a click on `chip` to the caller.
pub fn select_chip(chip: &Chip, on_change: impl FnOnce(String)) {
    on_change(chip.value.clone());
}

/// Labeled chip row. An empty `options` list renders the label alone.
#[component]
pub fn ChipSelector(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<Chip>>,
) -> impl IntoView {
    let chips = move || {
        let current = value.get();
        options.with(|options| {
            chip_states(options, &current)
                .map(|(chip, active)| {
                    let chip = chip.clone();
                    let text = chip.label.clone();
                    let pressed = if active { "true" } else { "false" };
                    view! {
                        <button
                            type="button"
                            class="chip-selector__chip"
                            class:chip-selector__chip--active=active
                            aria-pressed=pressed
                            on:click=move |_ev: leptos::ev::MouseEvent| {
                                select_chip(&chip, |v| on_change.run(v));
                            }
                        >
                            {text}
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let row_label = label.clone();

    view! {
        <div class="chip-selector">
            <span class="chip-selector__label">{label}</span>
            <Show when=move || options.with(|o| !o.is_empty())>
                <div class="chip-selector__row" role="group" aria-label=row_label.clone()>
                    {chips}
                </div>
            </Show>
        </div>
    }
}
