use leptos::prelude::*;

use navcanvas_shared::{Hotspot, HotspotSet, OverlayConfig};

use crate::language::browser_language;
use crate::overlay::NavigationCanvas;

/// `<img>` with a hotspot canvas stacked on top of it.
///
/// The overlay is attached once the image has loaded (natural size known)
/// and disposed when the component unmounts. An empty `config.locale` means
/// "use the browser language".
#[component]
pub fn HotspotCanvas(
    #[prop(into)] src: String,
    hotspots: HotspotSet,
    #[prop(optional)] config: OverlayConfig,
    #[prop(into)] on_click: Callback<(String, Hotspot)>,
) -> impl IntoView {
    let image_ref = NodeRef::<leptos::html::Img>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let handle = StoredValue::new_local(None::<NavigationCanvas>);

    let on_load = move |_| {
        let (Some(image), Some(canvas)) = (image_ref.get_untracked(), canvas_ref.get_untracked())
        else {
            return;
        };
        let mut config = config.clone();
        if config.locale.is_empty() {
            config.locale = browser_language();
        }
        let lookup = hotspots.clone();
        let attached =
            NavigationCanvas::attach(image, canvas, hotspots.clone(), config, move |key| {
                if let Some(hotspot) = lookup.get(key) {
                    on_click.run((key.to_string(), hotspot.clone()));
                }
            });
        match attached {
            Ok(nav) => handle.update_value(|slot| {
                // A reload of `src` fires `load` again; replace the old binding.
                if let Some(mut old) = slot.replace(nav) {
                    old.dispose();
                }
            }),
            Err(e) => {
                web_sys::console::warn_1(&format!("hotspot overlay not attached: {e}").into());
            }
        }
    };

    on_cleanup(move || {
        handle.update_value(|slot| {
            if let Some(mut nav) = slot.take() {
                nav.dispose();
            }
        });
    });

    view! {
        <div style="position: relative; display: inline-block; line-height: 0;">
            <img
                node_ref=image_ref
                src=src
                on:load=on_load
                style="display: block; max-width: 100%; visibility: hidden;"
            />
            <canvas
                node_ref=canvas_ref
                style="position: absolute; left: 0; top: 0;"
            />
        </div>
    }
}
