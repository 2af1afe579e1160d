//! Simple titled page used by routes whose content lives elsewhere.

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str, #[prop(optional)] blurb: Option<&'static str>) -> impl IntoView {
    view! {
        <section class="section-page">
            <h1 class="section-page__title">{title}</h1>
            {blurb.map(|text| view! { <p class="section-page__blurb">{text}</p> })}
        </section>
    }
}
