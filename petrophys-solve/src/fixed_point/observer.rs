use super::{Action, Event};

/// Watches fixed-point updates as they happen.
///
/// After every update the solver hands the observer the step it just took.
/// Returning `Some(Action::StopEarly)` accepts the current estimate, for
/// example once a saturation is good enough for a quick-look pass; `None`
/// lets the iteration run on to the tolerance or the iteration cap.
///
/// Any `FnMut(&Event) -> Option<Action>` closure is an observer, and `()`
/// observes nothing.
pub trait Observer {
    /// Inspects one update and optionally asks the solver to stop.
    fn observe(&mut self, event: &Event) -> Option<Action>;
}

impl<F> Observer for F
where
    F: FnMut(&Event) -> Option<Action>,
{
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self(event)
    }
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) -> Option<Action> {
        None
    }
}
