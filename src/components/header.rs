use dioxus::prelude::*;

/// Branded app header with two-tone logo and subtitle
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "ms-header",
            div { class: "ms-header-content",
                h1 { class: "ms-logo",
                    span { class: "ms-logo-word", "Musa" }
                    span { class: "ms-logo-word ms-logo-word--accent", "fir" }
                }
                p { class: "ms-header-subtitle", "Explore Provinces & Cities of Indonesia" }
            }
        }
    }
}
