use std::collections::VecDeque;

use crate::domain::occupancy::random_source::RandomSource;

/// Replays a fixed list of draws, one per call.
///
/// A scripted value that is out of range for the call is clamped to `upper - 1`. Once the
/// script is used up every further draw is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    draws: VecDeque<usize>,
}

impl ScriptedRandomSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        ScriptedRandomSource { draws: draws.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let upper = upper.max(1);
        match self.draws.pop_front() {
            Some(draw) if draw < upper => draw,
            Some(draw) => {
                log::warn!("Scripted draw {} is out of range for upper bound {}, clamping.", draw, upper);
                upper - 1
            }
            None => 0,
        }
    }
}
