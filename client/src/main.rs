use std::any::Any;
use std::cell::RefCell;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use navcanvas_client::HotspotCanvas;
use navcanvas_client::manifest::{MANIFEST_URL, Manifest, fetch_manifest};
use navcanvas_client::navigate::open_url;
use navcanvas_shared::Hotspot;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

#[component]
fn App() -> impl IntoView {
    let manifest: RwSignal<Option<Manifest>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    spawn_local(async move {
        match fetch_manifest(MANIFEST_URL).await {
            Ok(m) => manifest.set(Some(m)),
            Err(e) => {
                web_sys::console::warn_1(&format!("Manifest fetch failed: {e}").into());
                error.set(Some(e));
            }
        }
    });

    view! {
        {move || match manifest.get() {
            Some(m) => {
                let links = m.clone();
                let on_click = Callback::new(move |(key, _): (String, Hotspot)| {
                    let Some(url) = links.link(&key) else {
                        return;
                    };
                    if let Err(e) = open_url(url, links.link_target.as_deref()) {
                        web_sys::console::warn_1(&e.into());
                    }
                });
                view! {
                    <h1>{m.title.clone()}</h1>
                    <HotspotCanvas
                        src=m.image.clone()
                        hotspots=m.hotspots.clone()
                        config=m.config.clone()
                        on_click=on_click
                    />
                }
                .into_any()
            }
            None => {
                let message = error
                    .get()
                    .unwrap_or_else(|| "Loading…".to_string());
                view! { <p>{message}</p> }.into_any()
            }
        }}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };

    APP_MOUNT_HANDLE.with(move |slot| {
        // Drop a previous mount if main() runs twice (hot reload).
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, App);
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
