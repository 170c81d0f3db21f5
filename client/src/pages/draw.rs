//! Draw page: the webcam hand-tracking canvas.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::state::sketch::SketchState;

/// Draw with the index fingertip over a mirrored webcam feed.
#[component]
pub fn DrawPage() -> impl IntoView {
    let sketch = expect_context::<RwSignal<SketchState>>();

    view! {
        <div class="draw-page">
            <header class="draw-page__header toolbar">
                <span class="toolbar__board-name">"Gesture Canvas"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || sketch.get().status_line().is_some()>
                    <span class="draw-page__status">{move || sketch.get().status_line().unwrap_or_default()}</span>
                </Show>
                <a class="btn" href="/dashboard">"Dashboard"</a>
            </header>
            <CanvasHost/>
        </div>
    }
}
