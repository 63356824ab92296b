use dioxus::prelude::*;

use ui::views::Dashboard;

// Embedded shared theme (ui/assets/theme/main.css); web and desktop render
// with the identical stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Style { "{MAIN_CSS_INLINE}" }

        Dashboard {}
    }
}
