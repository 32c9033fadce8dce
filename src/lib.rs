use log::{debug, error, info};
use std::fmt;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod cache;
pub mod celebration;
pub mod components;
pub mod config;
pub mod confetti;
pub mod hooks;
pub mod i18n;
pub mod state;
pub mod utils;

use config::{CounterConfig, ATTR_TITLE, HOST_TAG};
use state::{celebrates, Controls, CounterSnapshot, DisplayState};

/// Reasons a counter refuses to activate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("minimum ({minimum}) must be below maximum ({maximum})")]
    EmptyRange { minimum: i32, maximum: i32 },
    #[error("default value {default_value} is outside [{minimum}, {maximum}]")]
    DefaultOutOfRange {
        default_value: i32,
        minimum: i32,
        maximum: i32,
    },
    #[error("attribute `{name}` must be an integer, got {value:?}")]
    InvalidAttribute { name: String, value: String },
    #[error("invalid counter properties: {0}")]
    InvalidProperties(String),
}

/// A user request coming from the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Increment,
    Decrement,
    Reset,
}

/// Notifications delivered to listeners before the mutating call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    CountChanged(i32),
    CountReset(i32),
    CelebrationRequested,
}

/// Handle returned by [`Counter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&CounterEvent)>;

/// Configuration that has not been activated yet.
///
/// Settings may be changed freely until [`CounterSetup::activate`] validates
/// them and produces a live [`Counter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSetup {
    config: CounterConfig,
}

impl CounterSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum(mut self, minimum: i32) -> Self {
        self.config.minimum = minimum;
        self
    }

    pub fn maximum(mut self, maximum: i32) -> Self {
        self.config.maximum = maximum;
        self
    }

    pub fn default_value(mut self, default_value: i32) -> Self {
        self.config.default_value = default_value;
        self
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// First activation: validate the bounds and start at the default value.
    pub fn activate(self) -> Result<Counter, ConfigurationError> {
        self.config.validate()?;
        info!(
            "Counter activated: range [{}, {}], default {}",
            self.config.minimum, self.config.maximum, self.config.default_value
        );
        Ok(Counter {
            value: self.config.default_value,
            config: self.config,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }
}

impl From<CounterConfig> for CounterSetup {
    fn from(config: CounterConfig) -> Self {
        Self { config }
    }
}

/// A bounded integer counter.
///
/// The value only ever moves by one step or back to the default, and stays
/// inside `[minimum, maximum]`. Steps past a bound are silently ignored.
pub struct Counter {
    value: i32,
    config: CounterConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Counter {
    pub fn initialize(
        minimum: i32,
        maximum: i32,
        default_value: i32,
    ) -> Result<Self, ConfigurationError> {
        CounterSetup::new()
            .minimum(minimum)
            .maximum(maximum)
            .default_value(default_value)
            .activate()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn minimum(&self) -> i32 {
        self.config.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.config.maximum
    }

    pub fn default_value(&self) -> i32 {
        self.config.default_value
    }

    /// Step up by one. Returns `false` (and notifies nobody) at the maximum.
    pub fn increment(&mut self) -> bool {
        if self.value >= self.config.maximum {
            debug!("Increment ignored at maximum {}", self.config.maximum);
            return false;
        }
        self.value += 1;
        self.emit(CounterEvent::CountChanged(self.value));
        self.celebrate_if_due(true);
        true
    }

    /// Step down by one. Returns `false` (and notifies nobody) at the minimum.
    pub fn decrement(&mut self) -> bool {
        if self.value <= self.config.minimum {
            debug!("Decrement ignored at minimum {}", self.config.minimum);
            return false;
        }
        self.value -= 1;
        self.emit(CounterEvent::CountChanged(self.value));
        self.celebrate_if_due(true);
        true
    }

    /// Return to the default value. Always notifies, even when nothing moved.
    pub fn reset(&mut self) -> bool {
        let previous = self.value;
        self.value = self.config.default_value;
        self.emit(CounterEvent::CountReset(self.value));
        let moved = previous != self.value;
        self.celebrate_if_due(moved);
        moved
    }

    pub fn apply(&mut self, intent: Intent) -> bool {
        debug!("Applying {:?} at {}", intent, self.value);
        match intent {
            Intent::Increment => self.increment(),
            Intent::Decrement => self.decrement(),
            Intent::Reset => self.reset(),
        }
    }

    pub fn current_state(&self) -> DisplayState {
        DisplayState::derive(self.value, self.config.minimum, self.config.maximum)
    }

    pub fn controls(&self) -> Controls {
        Controls::derive(
            self.value,
            self.config.minimum,
            self.config.maximum,
            self.config.default_value,
        )
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            value: self.value,
            state: self.current_state(),
            controls: self.controls(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CounterEvent) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn celebrate_if_due(&mut self, moved: bool) {
        if moved && celebrates(self.value) {
            self.emit(CounterEvent::CelebrationRequested);
        }
    }

    fn emit(&mut self, event: CounterEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

/// Mount a counter widget on every `<counter-app>` element in the document.
pub fn mount_all() {
    let document = gloo_utils::document();
    let hosts = match document.query_selector_all(HOST_TAG) {
        Ok(list) => list,
        Err(e) => {
            error!("Failed to query {} hosts: {:?}", HOST_TAG, e);
            return;
        }
    };

    info!("Mounting {} counter(s)", hosts.length());
    for idx in 0..hosts.length() {
        let Some(host) = hosts
            .item(idx)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let config = CounterConfig::from_attributes(|name| host.get_attribute(name));
        let title = host.get_attribute(ATTR_TITLE);
        utils::mount_on(host, config, title);
    }
}

/// Mount a counter on `root` with a plain JS object of properties
/// (`{ min, max, defaultCount, title }`). Missing keys take their defaults.
#[wasm_bindgen]
pub fn mount_counter(root: web_sys::Element, props: JsValue) -> Result<(), JsValue> {
    let (config, title) = if props.is_undefined() || props.is_null() {
        (CounterConfig::default(), None)
    } else {
        let config: CounterConfig = serde_wasm_bindgen::from_value(props.clone())
            .map_err(|e| ConfigurationError::InvalidProperties(e.to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let title = js_sys::Reflect::get(&props, &JsValue::from_str(ATTR_TITLE))
            .ok()
            .and_then(|value| value.as_string());
        (config, title)
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    utils::mount_on(root, Ok(config), title);
    Ok(())
}
