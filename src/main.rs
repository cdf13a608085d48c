use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{BackendSettings, Navbar, Overview};

mod api;
mod components;
mod contexts;
mod status;
mod utils;
mod views;

use contexts::BackendContext;
use utils::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Overview {},
        #[route("/settings")]
        BackendSettings {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Cluster Overview")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Settings are loaded once; the settings view writes through this signal
    let settings = use_signal(Settings::load);

    use_context_provider(|| BackendContext { settings });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
