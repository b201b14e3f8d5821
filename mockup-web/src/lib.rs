pub mod browser;
pub mod builder;
pub mod catalog;
pub mod html2canvas;
pub mod pages;
pub mod sortable;

use dioxus::prelude::*;
use pages::BuilderPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Mockup Builder" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-vh-100 bg-light", BuilderPage {} }
    }
}
