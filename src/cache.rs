//! Thread-local caches owned by the host page rather than any one counter.
//!
//! - The confetti module is imported at most once; every counter on the page
//!   awaits the same shared load. A failed load is dropped so the next
//!   celebration can retry.
//! - Locale bundles are fetched once per locale and reused by every instance.

use crate::i18n::Labels;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;

/// Result of importing the effect module, shared between all waiters.
pub type ModuleLoad = Shared<LocalBoxFuture<'static, Result<(), String>>>;

thread_local! {
    static CONFETTI_LOAD: RefCell<Option<ModuleLoad>> = const { RefCell::new(None) };

    static LABEL_STORE: RefCell<HashMap<String, Labels>> = RefCell::new(HashMap::new());
}

/// Return the in-flight or finished module load, starting it with `start` if needed.
pub fn confetti_load<F>(start: F) -> ModuleLoad
where
    F: FnOnce() -> LocalBoxFuture<'static, Result<(), String>>,
{
    CONFETTI_LOAD.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| start().shared())
            .clone()
    })
}

/// Drop a failed load so the next request imports again.
pub fn forget_confetti_load() {
    CONFETTI_LOAD.with(|slot| slot.borrow_mut().take());
}

pub fn cached_labels(locale: &str) -> Option<Labels> {
    LABEL_STORE.with(|store| store.borrow().get(locale).cloned())
}

pub fn store_labels(locale: &str, labels: Labels) {
    LABEL_STORE.with(|store| {
        store.borrow_mut().insert(locale.to_string(), labels);
    });
}
