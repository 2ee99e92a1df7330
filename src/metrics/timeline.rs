use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Recent-posts cache events (hit/miss/error).
    pub static ref RECENT_POSTS_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "recent_posts_cache_events_total",
        "Recent-posts cache events segmented by outcome",
        &["event"]
    )
    .expect("failed to register recent_posts_cache_events_total");

    /// Recent-posts cache write results (success/error).
    pub static ref RECENT_POSTS_CACHE_WRITE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "recent_posts_cache_write_total",
        "Recent-posts cache write attempts segmented by outcome",
        &["result"]
    )
    .expect("failed to register recent_posts_cache_write_total");

    /// Like toggles processed, segmented by resulting state.
    pub static ref LIKE_TOGGLE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "like_toggle_total",
        "Like toggles segmented by resulting state",
        &["state"]
    )
    .expect("failed to register like_toggle_total");
}
