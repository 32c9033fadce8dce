//! JavaScript interop for the confetti celebration.
//! The container element is defined by a module that is only imported the
//! first time a counter celebrates (see `confetti_helpers.js`).

use crate::cache::{confetti_load, forget_confetti_load};
use crate::celebration::Celebration;
use crate::config::{CONFETTI_MODULE, CONFETTI_POP_DELAY_MS};
use futures::FutureExt;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::NodeRef;

#[wasm_bindgen(module = "/confetti_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = importModule)]
    fn import_module(specifier: &str) -> js_sys::Promise;
}

/// Celebration that pops the widget's `<confetti-container>`.
#[derive(Clone, PartialEq)]
pub struct ConfettiEffect {
    container: NodeRef,
}

impl ConfettiEffect {
    pub fn new(container: NodeRef) -> Self {
        Self { container }
    }

    fn pop(&self) {
        let Some(element) = self.container.cast::<web_sys::Element>() else {
            debug!("Confetti container is gone, skipping");
            return;
        };
        // the container clears `popped` itself once the animation ends
        if let Err(e) = element.set_attribute("popped", "") {
            warn!("Failed to pop confetti: {:?}", e);
        }
    }
}

impl Celebration for ConfettiEffect {
    fn celebrate(&self) {
        let load = confetti_load(|| {
            async {
                JsFuture::from(import_module(CONFETTI_MODULE))
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("{:?}", e))
            }
            .boxed_local()
        });

        let effect = self.clone();
        spawn_local(async move {
            match load.await {
                Ok(()) => {
                    // give the freshly defined element a tick to upgrade
                    let _ = Timeout::new(CONFETTI_POP_DELAY_MS, move || effect.pop()).forget();
                }
                Err(e) => {
                    warn!("Confetti module unavailable: {}", e);
                    forget_confetti_load();
                }
            }
        });
    }
}
