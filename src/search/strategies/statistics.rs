use tracing::info;

/// Running counters for one strategy invocation, reported through the
/// tracing subscriber. These are observability only; the node count a
/// strategy returns comes from its parent map.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of states taken off a frontier for expansion
    expanded_nodes: i32,
    /// Number of states inserted into a frontier
    generated_nodes: i32,
    /// Number of states re-opened with a cheaper path cost
    reopened_nodes: i32,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
