//! Bounded buffers for names wrapped across physical lines.

use std::collections::VecDeque;

/// One buffered line fragment with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub index: usize,
    pub text: String,
}

/// What happens when a push would exceed the buffer's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Discard every buffered fragment together with the new one.
    Discard,
    /// Keep the newest fragments, evicting the oldest.
    EvictOldest,
}

/// Result of pushing a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Buffered,
    /// Fragments removed from the buffer by the overflow policy.
    Overflowed(Vec<Fragment>),
}

/// Bounded FIFO of name fragments.
#[derive(Debug, Clone)]
pub struct WrapBuffer {
    capacity: usize,
    policy: OverflowPolicy,
    fragments: VecDeque<Fragment>,
}

impl WrapBuffer {
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            capacity: capacity.max(1),
            policy,
            fragments: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, index: usize, text: impl Into<String>) -> PushOutcome {
        self.fragments.push_back(Fragment {
            index,
            text: text.into(),
        });
        if self.fragments.len() <= self.capacity {
            return PushOutcome::Buffered;
        }

        match self.policy {
            OverflowPolicy::Discard => PushOutcome::Overflowed(self.take()),
            OverflowPolicy::EvictOldest => {
                let excess = self.fragments.len() - self.capacity;
                PushOutcome::Overflowed(self.fragments.drain(..excess).collect())
            }
        }
    }

    /// Removes and returns every buffered fragment.
    pub fn take(&mut self) -> Vec<Fragment> {
        self.fragments.drain(..).collect()
    }

    /// Removes every fragment, returning their texts joined by single spaces.
    pub fn take_joined(&mut self) -> String {
        self.take()
            .into_iter()
            .map(|fragment| fragment.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
