use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use notify::{BrowserAlert, SharedNotifier};
use views::Home;

/// Page copy shown by the views.
mod content;
/// Define a components module that contains all shared components for our app.
mod components;
/// Where user-facing notices are raised.
mod notify;
/// Define a views module that contains the UI for all Layouts and Routes for our app.
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// Each variant represents a different URL pattern that can be matched by the router. If that pattern is matched,
/// the components for that route will be rendered. The landing page is the only page, so there is a single route
/// and nothing to navigate between.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // The route attribute defines the URL pattern that a specific route matches. If that pattern matches the URL,
    // the component for that route will be rendered. The component name that is rendered defaults to the variant name.
    #[route("/")]
    Home {},
}

// The asset macro takes a path relative to the crate root and minifies the stylesheet for the bundle.
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::launch(App);
}

/// App is the main component of our app. Components are the building blocks of dioxus apps. Each component is a function
/// that takes some props and returns an Element. In this case, App takes no props because it is the root of our app.
///
/// App also decides how notices reach the user. Views pull the [`SharedNotifier`] out of the context, so everything
/// below the router raises its notices through the browser's `alert()` dialog.
#[component]
fn App() -> Element {
    use_context_provider(|| Rc::new(BrowserAlert) as SharedNotifier);
    use_hook(|| debug!("mounting app shell"));

    rsx! {
        // The `document::Link` component adds the global stylesheet to the head of our app.
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // The router component renders the route enum we defined above. It will handle synchronization of the URL and render
        // the components for the active route.
        Router::<Route> {}
    }
}
