use crate::components::FeatureList;
use crate::content::HOME;
use crate::notify::{explore_now, SharedNotifier};
use dioxus::prelude::*;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    let notifier = use_context::<SharedNotifier>();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div { class: "home",
            h1 { "{HOME.title}" }
            p { class: "subtitle", "{HOME.subtitle}" }
            FeatureList { heading: HOME.features_heading, items: HOME.features }
            button {
                class: "explore-btn",
                onclick: move |_| explore_now(notifier.as_ref()),
                "{HOME.action_label}"
            }
        }
    }
}
