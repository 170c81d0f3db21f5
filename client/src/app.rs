//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, draw::DrawPage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionContext;
use crate::state::sketch::SketchState;

/// Hand-tracking runtime scripts. They define the `tf` and `Hands` globals
/// the canvas engine binds to.
const TFJS_CORE: &str = "https://cdn.jsdelivr.net/npm/@tensorflow/tfjs-core";
const TFJS_WEBGL: &str = "https://cdn.jsdelivr.net/npm/@tensorflow/tfjs-backend-webgl";
const MEDIAPIPE_HANDS: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands/hands.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=TFJS_CORE crossorigin="anonymous"></script>
                <script src=TFJS_WEBGL crossorigin="anonymous"></script>
                <script src=MEDIAPIPE_HANDS crossorigin="anonymous"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and draw-page state, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::for_platform());
    provide_context(RwSignal::new(SketchState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/gesture-canvas.css"/>
        <Title text="Gesture Canvas"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=DrawPage/>
            </Routes>
        </Router>
    }
}
