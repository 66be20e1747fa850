//! One-shot task timeline
//!
//! The page version of this widget leaned on fire-and-forget `setTimeout`
//! calls. Here every deferred action is an explicit task on a [`Timeline`]
//! polled from the frame loop with the same clock the animator sees, so tests
//! drive it with simulated time. Each task carries a cancellation handle even
//! where production never cancels.

/// Handle returned by [`Timeline::schedule`], used to cancel the task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskHandle(u64);

struct Task<K> {
    id: u64,
    deadline_ms: f64,
    kind: K,
}

/// Ordered set of pending one-shot tasks.
pub struct Timeline<K> {
    tasks: Vec<Task<K>>,
    next_id: u64,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Timeline<K> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `kind` to fire at the first poll where `now >= deadline_ms`.
    pub fn schedule(&mut self, deadline_ms: f64, kind: K) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            deadline_ms,
            kind,
        });
        TaskHandle(id)
    }

    /// Cancel a pending task. Cancelling an already-fired or unknown handle
    /// is a no-op.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.retain(|t| t.id != handle.0);
    }

    /// Remove and return every task whose deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Vec<K> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].deadline_ms <= now_ms {
                due.push(self.tasks.swap_remove(i).kind);
            } else {
                i += 1;
            }
        }
        due
    }

    /// Number of tasks still pending.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
