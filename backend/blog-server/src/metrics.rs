use metrics::counter;

/// Counters for the session endpoint
#[derive(Clone)]
pub struct SessionMetrics {
    prefix: &'static str,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "blog_session",
        }
    }

    pub fn session_established(&self) {
        counter!(format!("{}.established", self.prefix)).increment(1);
    }

    /// Record a `GET /session`, split by whether a cookie was present
    pub fn session_lookup(&self, found: bool) {
        let outcome = if found { "hit" } else { "miss" };
        counter!(format!("{}.lookups", self.prefix)).increment(1);
        counter!(format!("{}.lookups.{}", self.prefix, outcome)).increment(1);
    }

    pub fn session_cleared(&self) {
        counter!(format!("{}.cleared", self.prefix)).increment(1);
    }

    pub fn validation_failed(&self, field: &str) {
        counter!(format!("{}.validation_failures", self.prefix)).increment(1);
        counter!(format!("{}.validation_failures.{}", self.prefix, field)).increment(1);
    }

    pub fn identity_lookup(&self, found: bool) {
        let outcome = if found { "found" } else { "missing" };
        counter!(format!("{}.identity_lookups.{}", self.prefix, outcome)).increment(1);
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
