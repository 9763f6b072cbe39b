//! Random source port - Injected randomness capability
//!
//! Both the generator and the outcome resolver draw through this trait so
//! tests can substitute a seeded or scripted source instead of relying on
//! hidden global state.

/// Uniform random integer source
pub trait RandomSourcePort: Send + Sync {
    /// Uniform integer in the half-open range `[low, high)`.
    ///
    /// Callers must pass `low < high`.
    fn next_in(&self, low: i32, high: i32) -> i32;
}
