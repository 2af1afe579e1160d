//! Listing feed with a category filter.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;

use crate::components::chip_selector::{Chip, ChipSelector};

/// `(label, value)` pairs for the category filter. The empty value means
/// "no filter".
pub const CATEGORIES: &[(&str, &str)] = &[
    ("All", ""),
    ("Textbooks", "textbooks"),
    ("Electronics", "electronics"),
    ("Furniture", "furniture"),
    ("Clothing", "clothing"),
    ("Tickets", "tickets"),
    ("Other", "other"),
];

pub fn category_chips() -> Vec<Chip> {
    CATEGORIES.iter().map(|(label, value)| Chip::new(*label, *value)).collect()
}

/// Heading for the feed given the selected category value.
pub fn feed_heading(category: &str) -> String {
    match CATEGORIES.iter().find(|(_, value)| *value == category) {
        Some((_, "")) | None => "All listings".to_owned(),
        Some((label, _)) => format!("{label} listings"),
    }
}

/// Feed page: category chips above the listing area.
#[component]
pub fn FeedPage() -> impl IntoView {
    let category = RwSignal::new(String::new());
    let on_change = Callback::new(move |value: String| category.set(value));

    view! {
        <section class="feed-page">
            <ChipSelector
                label="Category"
                value=category
                on_change=on_change
                options=category_chips()
            />
            <h1 class="feed-page__heading">{move || feed_heading(&category.get())}</h1>
        </section>
    }
}
