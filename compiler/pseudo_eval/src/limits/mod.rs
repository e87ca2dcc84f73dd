//! Execution limits and the per-run budget that enforces them.
//!
//! Every statement execution, expression evaluation and loop iteration
//! costs one step, and so does every array element visited while a value is
//! printed, converted to text or snapshotted. The wall clock is only
//! consulted every [`CLOCK_CHECK_INTERVAL`] steps.
//!
//! Separately from steps, no string, rendered value, snapshotted variable or
//! total output may grow past [`Limits::max_size`].

use std::fmt;
use std::time::{Duration, Instant};

use pseudo_ir::Line;

use crate::errors::{RuntimeError, RuntimeErrorKind};

/// Default step budget.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Default routine call depth.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Default size cap, in bytes of text or elements of a snapshot.
pub const DEFAULT_MAX_SIZE: usize = 1_000_000;

/// Steps between wall-clock checks.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Bytes of text built or copied per step charged.
const TEXT_BYTES_PER_STEP: usize = 4096;

/// Caller-supplied limits for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum steps, `None` for unlimited.
    pub max_steps: Option<u64>,
    /// Maximum wall-clock time, `None` for unlimited.
    pub time_limit: Option<Duration>,
    /// Maximum nesting of routine calls.
    pub max_call_depth: usize,
    /// Largest string, printed value, snapshotted variable or total output.
    pub max_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_steps: Some(DEFAULT_MAX_STEPS),
            time_limit: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Limits {
    /// No step or time budget. The call-depth and size limits still apply.
    pub fn unlimited() -> Self {
        Limits {
            max_steps: None,
            time_limit: None,
            ..Limits::default()
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Which budget ran out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BudgetKind {
    Steps(u64),
    Time(Duration),
    Size(usize),
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetKind::Steps(max) => write!(f, "step limit of {max} exceeded"),
            BudgetKind::Time(limit) => {
                write!(f, "time limit of {} ms exceeded", limit.as_millis())
            }
            BudgetKind::Size(max) => write!(f, "size limit of {max} exceeded"),
        }
    }
}

/// Steps and time spent so far in one run.
#[derive(Debug)]
pub(crate) struct Budget {
    steps: u64,
    max_steps: Option<u64>,
    time_limit: Option<Duration>,
    deadline: Option<Instant>,
    max_size: usize,
    /// Line of the most recent step, for errors raised after execution.
    last_line: Line,
}

impl Budget {
    pub(crate) fn new(limits: &Limits) -> Self {
        Budget {
            steps: 0,
            max_steps: limits.max_steps,
            time_limit: limits.time_limit,
            deadline: limits
                .time_limit
                .and_then(|limit| Instant::now().checked_add(limit)),
            max_size: limits.max_size,
            last_line: 1,
        }
    }

    /// Charge one step.
    #[inline]
    pub(crate) fn tick(&mut self, line: Line) -> Result<(), RuntimeError> {
        self.charge(1, line)
    }

    /// Charge for building `bytes` of text: one step per
    /// [`TEXT_BYTES_PER_STEP`], rounded down.
    #[inline]
    pub(crate) fn charge_text(&mut self, bytes: usize, line: Line) -> Result<(), RuntimeError> {
        match (bytes / TEXT_BYTES_PER_STEP) as u64 {
            0 => Ok(()),
            steps => self.charge(steps, line),
        }
    }

    fn charge(&mut self, steps: u64, line: Line) -> Result<(), RuntimeError> {
        let before = self.steps;
        self.steps = self.steps.saturating_add(steps);
        self.last_line = line;
        if let Some(max) = self.max_steps {
            if self.steps > max {
                return Err(exceeded(BudgetKind::Steps(max), line));
            }
        }
        // Consult the clock whenever this charge crossed an interval boundary.
        if before / CLOCK_CHECK_INTERVAL != self.steps / CLOCK_CHECK_INTERVAL {
            if let (Some(deadline), Some(limit)) = (self.deadline, self.time_limit) {
                if Instant::now() >= deadline {
                    return Err(exceeded(BudgetKind::Time(limit), line));
                }
            }
        }
        Ok(())
    }

    /// Fail if something of `size` would pass the size cap.
    #[inline]
    pub(crate) fn check_size(&self, size: usize, line: Line) -> Result<(), RuntimeError> {
        if size > self.max_size {
            return Err(exceeded(BudgetKind::Size(self.max_size), line));
        }
        Ok(())
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn last_line(&self) -> Line {
        self.last_line
    }
}

#[cold]
fn exceeded(budget: BudgetKind, line: Line) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::StepLimitExceeded { budget }, line)
}
