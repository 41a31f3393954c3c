use leptos::prelude::*;

use crate::glue;

mod script;

pub use script::ScriptHandle;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Page shell around the demo canvas.
///
/// The canvas itself lives in `index.html`; the glue script binds to it on its
/// own once it runs. This component only owns the script's attach/detach
/// lifecycle and a static header, so it renders the same thing whether the
/// script loads, fails, or is still in flight.
#[component]
pub fn App() -> impl IntoView {
    let handle: StoredValue<Option<ScriptHandle>, LocalStorage> = StoredValue::new_local(None);

    // Runs after the view is in the DOM. The guard keeps effect re-runs from
    // attaching a second script node.
    Effect::new(move |_| {
        if handle.with_value(|h| h.is_some()) {
            return;
        }
        match ScriptHandle::attach(&glue::glue_src(glue::base_path())) {
            Ok(h) => handle.set_value(Some(h)),
            Err(e) => {
                web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&e));
            }
        }
    });

    on_cleanup(move || {
        handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.detach();
            }
        });
    });

    view! {
        <div style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 18px;">
            <h2 style="margin: 0 0 8px 0;">"Wasm Graphics Playground"</h2>
            <p style="margin: 0 0 16px 0; color: #555;">
                "This canvas is powered by a C++ WebAssembly module:"
            </p>
        </div>
    }
}
