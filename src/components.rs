//! Yew view components for the counter widget.
//!
//! `CounterApp` owns the engine through [`use_counter`]; the smaller
//! components are pure functions of their props.

use crate::celebration::relay;
use crate::config::CounterConfig;
use crate::confetti::ConfettiEffect;
use crate::hooks::{use_counter, use_labels};
use crate::i18n::{Labels, LocalizationConfig};
use crate::state::Controls;
use crate::{ConfigurationError, CounterEvent, Intent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountDisplayProps {
    pub value: i32,
}

#[function_component(CountDisplay)]
pub fn count_display(props: &CountDisplayProps) -> Html {
    html! {
        <div class="count" aria-live="polite">{ props.value }</div>
    }
}

/// Decrement, reset and increment buttons.
#[derive(Properties, PartialEq)]
pub struct CounterControlsProps {
    pub controls: Controls,
    pub labels: Labels,
    pub on_intent: Callback<Intent>,
}

#[function_component(CounterControls)]
pub fn counter_controls(props: &CounterControlsProps) -> Html {
    let button = |intent: Intent, label: &str, disabled: bool| {
        let on_intent = props.on_intent.clone();
        html! {
            <button
                disabled={disabled}
                onclick={Callback::from(move |_: MouseEvent| on_intent.emit(intent))}
            >
                { label.to_string() }
            </button>
        }
    };

    html! {
        <div class="controls">
            { button(Intent::Decrement, &props.labels.decrement, props.controls.decrement_disabled) }
            { button(Intent::Reset, &props.labels.reset, props.controls.reset_disabled) }
            { button(Intent::Increment, &props.labels.increment, props.controls.increment_disabled) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigurationErrorNoticeProps {
    pub error: ConfigurationError,
}

#[function_component(ConfigurationErrorNotice)]
pub fn configuration_error_notice(props: &ConfigurationErrorNoticeProps) -> Html {
    html! {
        <div class="counter-error" role="alert">
            { format!("counter-app is misconfigured: {}", props.error) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterAppProps {
    #[prop_or(Ok(CounterConfig::default()))]
    pub config: Result<CounterConfig, ConfigurationError>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub on_count_changed: Callback<i32>,
    #[prop_or_default]
    pub on_count_reset: Callback<i32>,
    #[prop_or_default]
    pub localization: LocalizationConfig,
    #[prop_or_default]
    pub children: Html,
}

/// The counter widget: value, buttons, slotted content and the confetti layer.
#[function_component(CounterApp)]
pub fn counter_app(props: &CounterAppProps) -> Html {
    let confetti_ref = use_node_ref();
    let localized = use_labels(props.localization.clone());

    let on_event = {
        let on_count_changed = props.on_count_changed.clone();
        let on_count_reset = props.on_count_reset.clone();
        let celebrate = relay(ConfettiEffect::new(confetti_ref.clone()));
        Callback::from(move |event: CounterEvent| {
            match event {
                CounterEvent::CountChanged(value) => on_count_changed.emit(value),
                CounterEvent::CountReset(value) => on_count_reset.emit(value),
                CounterEvent::CelebrationRequested => {}
            }
            celebrate(&event);
        })
    };
    let counter = use_counter(props.config.clone(), on_event);

    let snapshot = match counter.snapshot {
        Ok(snapshot) => snapshot,
        Err(error) => return html! { <ConfigurationErrorNotice error={error} /> },
    };

    let state_tag = snapshot.state.tag().map(AttrValue::from);
    let dir = localized.rtl.then_some(AttrValue::from("rtl"));

    html! {
        <div class="counter-app" data-state={state_tag} dir={dir}>
            <div class="wrapper">
                if let Some(title) = props.title.clone() {
                    <h3 class="title">{ title.to_string() }</h3>
                }
                <CountDisplay value={snapshot.value} />
                <CounterControls
                    controls={snapshot.controls}
                    labels={localized.labels.clone()}
                    on_intent={counter.dispatch.clone()}
                />
                { props.children.clone() }
            </div>
            <confetti-container id="confetti" ref={confetti_ref}></confetti-container>
        </div>
    }
}
