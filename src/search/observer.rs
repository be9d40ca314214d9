use crate::search::State;
use tracing::trace;

/// Where an observed state currently sits in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedRole {
    /// The state was just inserted into the frontier.
    Frontier,
    /// The state was just taken up for expansion.
    Explored,
}

/// Synchronous progress hook invoked from inside the search loop. Purely
/// for external progress reporting: implementations must not block and get
/// no way to influence the search.
pub trait SearchObserver {
    fn observe(&mut self, state: State, role: ObservedRole);
}

/// Observer that forwards every event to the `tracing` subscriber at trace
/// level.
#[derive(Debug, Default)]
pub struct TraceObserver {}

impl TraceObserver {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchObserver for TraceObserver {
    fn observe(&mut self, state: State, role: ObservedRole) {
        trace!(%state, ?role);
    }
}

pub(crate) fn notify(
    observer: &mut Option<&mut (dyn SearchObserver + '_)>,
    state: State,
    role: ObservedRole,
) {
    if let Some(observer) = observer {
        observer.observe(state, role);
    }
}
