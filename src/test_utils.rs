use crate::search::{ObservedRole, SearchObserver, State};

pub const CORRIDOR_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/corridor.txt"));

pub const OPEN_SQUARE_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/open_square.txt"));

pub const ALREADY_AT_GOAL_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/maps/already_at_goal.txt"
));

pub const WALLED_OFF_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/walled_off.txt"));

pub const DETOUR_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/detour.txt"));

pub const TWO_GOALS_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/two_goals.txt"));

pub const START_GOAL_PAIR_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/maps/start_goal_pair.txt"
));

pub const NO_GOALS_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/no_goals.txt"));

pub const SAMPLE_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/sample.txt"));

/// Observer that records every event it sees, for asserting on exploration
/// order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(State, ObservedRole)>,
}

impl SearchObserver for RecordingObserver {
    fn observe(&mut self, state: State, role: ObservedRole) {
        self.events.push((state, role));
    }
}
