use crate::cache::{cached_labels, store_labels};
use crate::config::CounterConfig;
use crate::i18n::{browser_language, fetch_labels, is_rtl, Labels, LocalizationConfig};
use crate::state::CounterSnapshot;
use crate::{ConfigurationError, Counter, CounterEvent, CounterSetup, Intent};
use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// What a rendering component gets back from [`use_counter`].
pub struct UseCounterHandle {
    /// The frame to render, or the reason the counter never activated.
    pub snapshot: Result<CounterSnapshot, ConfigurationError>,
    /// Send a user intent into the engine; re-renders afterwards.
    pub dispatch: Callback<Intent>,
}

/// Own a [`Counter`] for the lifetime of the calling component.
///
/// The engine is activated exactly once, on first render. Later changes to
/// `config` are ignored. Engine events are forwarded to the most recent
/// `on_event` passed in.
#[hook]
pub fn use_counter(
    config: Result<CounterConfig, ConfigurationError>,
    on_event: Callback<CounterEvent>,
) -> UseCounterHandle {
    // Always points at the latest callback, so the listener registered at
    // activation never goes stale.
    let relay = use_mut_ref(|| Callback::from(|_: CounterEvent| ()));
    *relay.borrow_mut() = on_event;

    let engine = {
        let relay = relay.clone();
        use_mut_ref(move || {
            let activated = config.and_then(|c| CounterSetup::from(c).activate());
            match activated {
                Ok(mut counter) => {
                    counter.subscribe(move |event| relay.borrow().emit(*event));
                    Ok(counter)
                }
                Err(e) => {
                    error!("Counter failed to activate: {}", e);
                    Err(e)
                }
            }
        })
    };

    let force_update = use_force_update();
    let dispatch = {
        let engine = engine.clone();
        Callback::from(move |intent: Intent| {
            if let Ok(counter) = engine.borrow_mut().as_mut() {
                counter.apply(intent);
            }
            force_update.force_update();
        })
    };

    let snapshot = engine
        .borrow()
        .as_ref()
        .map(Counter::snapshot)
        .map_err(|e| e.clone());

    UseCounterHandle { snapshot, dispatch }
}

/// Button labels for the browser's language.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedLabels {
    pub labels: Labels,
    pub locale: Option<String>,
    pub rtl: bool,
}

/// Resolve the locale once, then fetch its bundle unless another counter
/// already did. Fetch failures keep the built-in labels.
#[hook]
pub fn use_labels(config: LocalizationConfig) -> LocalizedLabels {
    let locale = {
        let config = config.clone();
        use_memo((), move |_| {
            browser_language().and_then(|lang| config.negotiate(&lang).map(str::to_string))
        })
    };

    let labels = {
        let locale = locale.clone();
        use_state(move || locale.as_deref().and_then(cached_labels).unwrap_or_default())
    };

    {
        let labels = labels.clone();
        use_effect_with((*locale).clone(), move |locale| {
            if let Some(locale) = locale.clone() {
                if cached_labels(&locale).is_none() {
                    spawn_local(async move {
                        match fetch_labels(&config, &locale).await {
                            Ok(fetched) => {
                                store_labels(&locale, fetched.clone());
                                labels.set(fetched);
                            }
                            Err(e) => warn!("Using built-in labels for {}: {}", locale, e),
                        }
                    });
                }
            }
            || ()
        });
    }

    LocalizedLabels {
        labels: (*labels).clone(),
        rtl: locale.as_deref().map(is_rtl).unwrap_or(false),
        locale: (*locale).clone(),
    }
}
