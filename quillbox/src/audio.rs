//! Key-click sound pool.
//!
//! ## Usage
//!
//! Install a set of click samples once at startup and hand a clone of the
//! pool handle to every text box. Replacing the set drops the previous
//! samples, releasing their audio resources exactly once.

use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;

/// A playable key-click sample.
///
/// `play` is fire-and-forget; the audio backend owns channel management.
pub trait KeyClickSample: Send + Sync {
    /// Triggers playback of this sample.
    fn play(&self);
}

/// Shared pool of key-click samples.
///
/// The pool is a cloneable handle over one shared sample list, injected
/// into each widget instead of living in a process-wide static. The list
/// is replaceable at runtime; the last assignment wins and the previous
/// samples are dropped on replacement (or when the last handle goes away).
#[derive(Clone, Default)]
pub struct KeyClickPool {
    samples: Arc<RwLock<Vec<Box<dyn KeyClickSample>>>>,
}

impl KeyClickPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool pre-loaded with `samples`.
    pub fn with_samples(samples: Vec<Box<dyn KeyClickSample>>) -> Self {
        Self {
            samples: Arc::new(RwLock::new(samples)),
        }
    }

    /// Replaces the sample set. The previous samples are dropped here.
    pub fn replace(&self, samples: Vec<Box<dyn KeyClickSample>>) {
        *self.samples.write() = samples;
    }

    /// Drops every sample, leaving the pool empty.
    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    /// Returns the number of installed samples.
    pub fn len(&self) -> usize {
        self.samples.read().len()
    }

    /// Returns whether the pool holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.read().is_empty()
    }

    /// Plays one sample picked uniformly at random. No-op when empty.
    pub fn play_random(&self) {
        let samples = self.samples.read();
        if samples.is_empty() {
            return;
        }
        let index = rand::rng().random_range(0..samples.len());
        samples[index].play();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingSample {
        plays: Arc<AtomicUsize>,
        drops: Arc<AtomicUsize>,
    }

    impl KeyClickSample for CountingSample {
        fn play(&self) {
            self.plays.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Drop for CountingSample {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_sample(
        plays: &Arc<AtomicUsize>,
        drops: &Arc<AtomicUsize>,
    ) -> Box<dyn KeyClickSample> {
        Box::new(CountingSample {
            plays: Arc::clone(plays),
            drops: Arc::clone(drops),
        })
    }

    #[test]
    fn empty_pool_play_is_a_noop() {
        let pool = KeyClickPool::new();
        pool.play_random();
        assert!(pool.is_empty());
    }

    #[test]
    fn play_random_hits_an_installed_sample() {
        let plays = Arc::new(AtomicUsize::new(0));
        let drops = Arc::new(AtomicUsize::new(0));
        let pool = KeyClickPool::with_samples(vec![
            counting_sample(&plays, &drops),
            counting_sample(&plays, &drops),
        ]);

        pool.play_random();
        pool.play_random();
        assert_eq!(plays.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn replacing_the_pool_drops_previous_samples_once() {
        let plays = Arc::new(AtomicUsize::new(0));
        let drops = Arc::new(AtomicUsize::new(0));
        let pool = KeyClickPool::with_samples(vec![
            counting_sample(&plays, &drops),
            counting_sample(&plays, &drops),
        ]);
        let other_handle = pool.clone();

        pool.replace(vec![counting_sample(&plays, &drops)]);
        assert_eq!(drops.load(Ordering::SeqCst), 2);
        assert_eq!(other_handle.len(), 1);

        other_handle.clear();
        assert_eq!(drops.load(Ordering::SeqCst), 3);
    }
}
