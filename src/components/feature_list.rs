use dioxus::prelude::*;

/// A sub-heading over a bulleted list, left aligned inside its row.
#[component]
pub fn FeatureList(heading: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "features",
            div { class: "features-block",
                h3 { "{heading}" }
                ul {
                    for item in items.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }
            }
        }
    }
}
