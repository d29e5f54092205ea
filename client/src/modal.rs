use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::{document, query_all, set_visible};

struct ModalTrigger {
    element: Element,
    handler: Closure<dyn FnMut(Event)>,
}

/// Click handlers wired by [`initialize_modal`]. `dispose()` removes them.
#[wasm_bindgen]
pub struct ModalBindings {
    triggers: Vec<ModalTrigger>,
}

impl ModalBindings {
    fn bind(&mut self, trigger: Element, modal: Element, visible: bool) -> Result<(), String> {
        let handler = Closure::<dyn FnMut(Event)>::new(move |_| set_visible(&modal, visible));
        trigger
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| format!("addEventListener(click) failed: {e:?}"))?;
        self.triggers.push(ModalTrigger {
            element: trigger,
            handler,
        });
        Ok(())
    }
}

#[wasm_bindgen]
impl ModalBindings {
    /// Number of open/close triggers currently bound.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.triggers.len()
    }

    pub fn dispose(&mut self) {
        for trigger in self.triggers.drain(..) {
            let _ = trigger.element.remove_event_listener_with_callback(
                "click",
                trigger.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for ModalBindings {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Hide every `[data-modal=name]` and make `[data-modal-openable=name]` /
/// `[data-modal-closable=name]` elements show / hide it on click.
pub fn bind_modals() -> Result<ModalBindings, String> {
    let document = document()?;
    let mut bindings = ModalBindings {
        triggers: Vec::new(),
    };
    for modal in query_all(&document, "[data-modal]")? {
        let Some(name) = modal.get_attribute("data-modal") else {
            continue;
        };
        set_visible(&modal, false);

        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        for (attr, visible) in [("data-modal-openable", true), ("data-modal-closable", false)] {
            for trigger in query_all(&document, &format!("[{attr}=\"{escaped}\"]"))? {
                bindings.bind(trigger, modal.clone(), visible)?;
            }
        }
    }
    Ok(bindings)
}

#[wasm_bindgen(js_name = initializeModal)]
pub fn initialize_modal() -> Result<ModalBindings, JsValue> {
    bind_modals().map_err(|e| JsValue::from_str(&e))
}
