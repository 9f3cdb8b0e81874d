//! Rolling statistics over finished games
//!
//! Used by the headless autoplay runner to summarise many sessions.

use serde::Serialize;
use std::collections::VecDeque;

/// Statistics tracker with rolling averages
///
/// # Example
///
/// ```rust
/// use power_snake::metrics::SessionStats;
///
/// let mut stats = SessionStats::new(100);
/// stats.record_game(120, 340, 7);
///
/// assert_eq!(stats.total_games(), 1);
/// println!("{}", stats.format_summary());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    /// Final scores (rolling window)
    scores: VecDeque<u32>,

    /// Ticks survived (rolling window)
    ticks: VecDeque<u64>,

    /// Final snake lengths (rolling window)
    lengths: VecDeque<usize>,

    total_games: usize,
    total_ticks: u64,
    best_score: u32,
    window_size: usize,
}

impl SessionStats {
    /// Create a tracker keeping the last `window_size` games for averages
    pub fn new(window_size: usize) -> Self {
        Self {
            scores: VecDeque::with_capacity(window_size),
            ticks: VecDeque::with_capacity(window_size),
            lengths: VecDeque::with_capacity(window_size),
            total_games: 0,
            total_ticks: 0,
            best_score: 0,
            window_size,
        }
    }

    /// Record a finished game
    pub fn record_game(&mut self, score: u32, ticks: u64, length: usize) {
        Self::push_deque(&mut self.scores, score, self.window_size);
        Self::push_deque(&mut self.ticks, ticks, self.window_size);
        Self::push_deque(&mut self.lengths, length, self.window_size);
        self.total_games += 1;
        self.total_ticks += ticks;
        self.best_score = self.best_score.max(score);
    }

    pub fn mean_score(&self) -> f64 {
        Self::mean(self.scores.iter().map(|s| *s as f64), self.scores.len())
    }

    pub fn mean_ticks(&self) -> f64 {
        Self::mean(self.ticks.iter().map(|t| *t as f64), self.ticks.len())
    }

    pub fn mean_length(&self) -> f64 {
        Self::mean(self.lengths.iter().map(|l| *l as f64), self.lengths.len())
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Best score ever recorded, not limited to the window
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Format a one-line summary of the current statistics
    pub fn format_summary(&self) -> String {
        format!(
            "Games: {} | Ticks: {} | Score: {:.2} | Best: {} | Survived: {:.1} | Len: {:.1}",
            self.total_games,
            self.total_ticks,
            self.mean_score(),
            self.best_score,
            self.mean_ticks(),
            self.mean_length(),
        )
    }

    fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
        if len == 0 {
            0.0
        } else {
            values.sum::<f64>() / len as f64
        }
    }

    /// Helper function to push to a deque with size limit
    fn push_deque<T>(deque: &mut VecDeque<T>, value: T, window_size: usize) {
        if deque.len() >= window_size {
            deque.pop_front();
        }
        deque.push_back(value);
    }
}
