use dioxus::prelude::*;

/// Search input over province names. No debouncing: the directory view
/// refilters synchronously on every keystroke.
#[component]
pub fn SearchBox(term: Signal<String>) -> Element {
    let mut term = term;

    rsx! {
        div { class: "ms-search-box",
            span { class: "ms-search-icon", "🔍" }
            input {
                r#type: "text",
                placeholder: "Search provinces...",
                value: "{term}",
                oninput: move |evt| term.set(evt.value()),
            }
        }
    }
}
