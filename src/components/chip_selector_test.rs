use super::*;

fn ab() -> Vec<Chip> {
    vec![Chip::new("A", "a"), Chip::new("B", "b")]
}

fn active_labels(options: &[Chip], current: &str) -> Vec<String> {
    chip_states(options, current)
        .filter(|(_, active)| *active)
        .map(|(chip, _)| chip.label.clone())
        .collect()
}

// =============================================================
// chip_states
// =============================================================

#[test]
fn current_value_marks_matching_chip_active() {
    let options = ab();
    let states: Vec<_> = chip_states(&options, "b")
        .map(|(chip, active)| (chip.label.as_str(), active))
        .collect();
    assert_eq!(states, vec![("A", false), ("B", true)]);
}

#[test]
fn unknown_value_marks_nothing_active() {
    assert!(active_labels(&ab(), "z").is_empty());
}

#[test]
fn match_is_exact_not_case_insensitive() {
    assert!(active_labels(&ab(), "B").is_empty());
    assert!(active_labels(&ab(), "b ").is_empty());
}

#[test]
fn match_uses_value_not_label() {
    let options = vec![Chip::new("a", "first"), Chip::new("b", "second")];
    assert_eq!(active_labels(&options, "second"), vec!["b".to_owned()]);
    assert!(active_labels(&options, "a").is_empty());
}

#[test]
fn empty_options_yield_no_chips() {
    assert_eq!(chip_states(&[], "anything").count(), 0);
}

#[test]
fn chip_order_is_preserved() {
    let options = vec![Chip::new("Z", "z"), Chip::new("A", "a"), Chip::new("M", "m")];
    let labels: Vec<_> = chip_states(&options, "").map(|(chip, _)| chip.label.as_str()).collect();
    assert_eq!(labels, ["Z", "A", "M"]);
}

#[test]
fn every_option_is_active_exactly_when_selected() {
    let options = vec![Chip::new("All", ""), Chip::new("Books", "books"), Chip::new("Tech", "tech")];
    for selected in &options {
        let active = active_labels(&options, &selected.value);
        assert_eq!(active, vec![selected.label.clone()]);
    }
}

// =============================================================
// select_chip
// =============================================================

#[test]
fn select_chip_reports_exactly_that_value() {
    let options = ab();
    let mut reported = Vec::new();
    select_chip(&options[0], |v| reported.push(v));
    assert_eq!(reported, vec!["a".to_owned()]);
}

#[test]
fn select_chip_reports_value_even_when_already_selected() {
    let chip = Chip::new("B", "b");
    let mut reported = Vec::new();
    select_chip(&chip, |v| reported.push(v));
    select_chip(&chip, |v| reported.push(v));
    assert_eq!(reported, vec!["b".to_owned(), "b".to_owned()]);
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    fn render(current: &str, options: Vec<Chip>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let value = RwSignal::new(current.to_owned());
            let on_change = Callback::new(|_: String| {});
            view! { <ChipSelector label="Cat" value=value on_change=on_change options=options/> }.to_html()
        })
    }

    #[test]
    fn empty_options_render_label_only() {
        let html = render("", Vec::new());
        assert!(html.contains("chip-selector__label"), "{html}");
        assert!(html.contains(">Cat<"), "{html}");
        assert!(!html.contains("chip-selector__chip"), "{html}");
        assert!(!html.contains("chip-selector__row"), "{html}");
    }

    #[test]
    fn only_selected_chip_renders_active() {
        let html = render("b", ab());
        assert_eq!(html.matches("chip-selector__chip--active").count(), 1, "{html}");
        assert!(html.contains(r#"chip-selector__chip--active">B"#), "{html}");
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1, "{html}");
    }

    #[test]
    fn unmatched_value_renders_every_chip_inactive() {
        let html = render("z", ab());
        assert_eq!(html.matches("<button").count(), 2, "{html}");
        assert!(!html.contains("chip-selector__chip--active"), "{html}");
    }
}
