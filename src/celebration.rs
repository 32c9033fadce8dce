//! Capability interface for the fire-and-forget celebration effect.
//!
//! Implementations must never fail loudly: the counter keeps working whether
//! the effect runs, fails to load, or is missing entirely.

use crate::CounterEvent;
use std::rc::Rc;

pub trait Celebration {
    fn celebrate(&self);
}

/// An absent collaborator is a celebration that does nothing.
impl<C: Celebration> Celebration for Option<C> {
    fn celebrate(&self) {
        if let Some(inner) = self {
            inner.celebrate();
        }
    }
}

impl<C: Celebration + ?Sized> Celebration for Rc<C> {
    fn celebrate(&self) {
        (**self).celebrate();
    }
}

/// Build a counter listener that forwards `CelebrationRequested` to `effect`.
pub fn relay<C>(effect: C) -> impl Fn(&CounterEvent)
where
    C: Celebration + 'static,
{
    move |event: &CounterEvent| {
        if *event == CounterEvent::CelebrationRequested {
            effect.celebrate();
        }
    }
}
