use crate::components::{CounterApp, CounterAppProps};
use crate::config::{CounterConfig, EVENT_COUNT_CHANGED, EVENT_COUNT_RESET};
use crate::i18n::LocalizationConfig;
use crate::ConfigurationError;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Element};
use yew::prelude::*;

/// Parse a host attribute into a number, keeping the raw text for the error.
pub fn parse_attribute<T>(name: &str, raw: &str) -> Result<T, ConfigurationError>
where
    T: std::str::FromStr,
{
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigurationError::InvalidAttribute {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

/// Fire `count-changed` / `count-reset` on the host element with the value as `detail`.
pub fn dispatch_count_event(host: &Element, name: &str, value: i32) {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from(value));
    init.set_bubbles(true);
    init.set_composed(true);

    let dispatched = CustomEvent::new_with_event_init_dict(name, &init)
        .and_then(|event| host.dispatch_event(&event));
    if let Err(e) = dispatched {
        warn!("Failed to dispatch {} on host: {:?}", name, e);
    }
}

/// Take the host's existing markup so it can be re-rendered below the controls.
fn take_host_children(host: &Element) -> Html {
    let markup = host.inner_html();
    host.set_inner_html("");
    if markup.trim().is_empty() {
        Html::default()
    } else {
        Html::from_html_unchecked(AttrValue::from(markup))
    }
}

/// Render a counter widget into `host`, forwarding its notifications as DOM events.
pub(crate) fn mount_on(
    host: Element,
    config: Result<CounterConfig, ConfigurationError>,
    title: Option<String>,
) {
    let children = take_host_children(&host);

    let on_count_changed = {
        let host = host.clone();
        Callback::from(move |value: i32| dispatch_count_event(&host, EVENT_COUNT_CHANGED, value))
    };
    let on_count_reset = {
        let host = host.clone();
        Callback::from(move |value: i32| dispatch_count_event(&host, EVENT_COUNT_RESET, value))
    };

    let props = CounterAppProps {
        config,
        title: title.map(AttrValue::from),
        on_count_changed,
        on_count_reset,
        localization: LocalizationConfig::default(),
        children,
    };
    yew::Renderer::<CounterApp>::with_root_and_props(host, props).render();
}
