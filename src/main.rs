use dioxus::prelude::*;

use musafir::components::App;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        App {}
    }
}
