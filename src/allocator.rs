use alloc::vec::Vec;
use core::fmt::{Debug, Formatter, Result};

use crate::config::{DEFAULT_MAX_PID, DEFAULT_MIN_PID};
use crate::error::{AllocError, AllocResult};

/// Failure sentinel returned by [`PidAllocator::alloc_raw`], covering both
/// "not initialized" and "exhausted". Use [`PidAllocator::alloc`] to tell
/// the two apart.
pub const PID_FAILED: isize = -1;

/// Round-robin pid allocator over a closed range `[min, max]`.
///
/// Allocation scans forward from a cursor and wraps around once, so a pid
/// freed behind the cursor is not handed out again until the cursor comes
/// back to it; releasing a pid below the cursor pulls the cursor back so
/// the lower pid is reused first.
pub struct PidAllocator {
    min: usize,
    max: usize,
    /// Membership table indexed by `pid - min`; `true` means allocated.
    /// Empty until [`PidAllocator::init`] builds it.
    used: Vec<bool>,
    /// Next pid to probe first; stays within `[min, max]` once ready.
    next: usize,
    ready: bool,
}

impl PidAllocator {
    /// Creates an allocator for `[min, max]`. No pid can be handed out
    /// before [`PidAllocator::init`] is called.
    pub fn new(min: usize, max: usize) -> AllocResult<Self> {
        // every valid pid must be representable on the raw isize channel
        if max < min || max > isize::MAX as usize {
            return Err(AllocError::InvalidArgs);
        }
        Ok(Self {
            min,
            max,
            used: Vec::new(),
            next: min,
            ready: false,
        })
    }

    /// (Re)builds the membership table with every pid free and rewinds the
    /// cursor to `min`. Idempotent; previously allocated pids are forgotten.
    /// On a failed table reservation the allocator is left not ready.
    pub fn init(&mut self) -> AllocResult {
        self.ready = false;
        let len = self.capacity();
        self.used
            .try_reserve_exact(len.saturating_sub(self.used.len()))
            .map_err(|_| AllocError::NoMemory)?;
        self.used.clear();
        self.used.resize(len, false);
        self.next = self.min;
        self.ready = true;
        Ok(())
    }

    /// Allocates the first free pid at or circularly after the cursor, then
    /// advances the cursor past it.
    pub fn alloc(&mut self) -> AllocResult<usize> {
        if !self.ready {
            return Err(AllocError::BadState);
        }
        let start = self.next;
        for pid in (start..=self.max).chain(self.min..start) {
            if !self.used[pid - self.min] {
                self.used[pid - self.min] = true;
                self.next = if pid == self.max { self.min } else { pid + 1 };
                return Ok(pid);
            }
        }
        Err(AllocError::NoResources)
    }

    /// Like [`PidAllocator::alloc`], but collapses every failure into
    /// [`PID_FAILED`].
    pub fn alloc_raw(&mut self) -> isize {
        match self.alloc() {
            Ok(pid) => pid as isize,
            Err(_) => PID_FAILED,
        }
    }

    /// Returns `pid` to the pool. Calls before [`PidAllocator::init`], with
    /// an out-of-range pid, or with an already-free pid are all no-ops.
    pub fn dealloc(&mut self, pid: usize) {
        if !self.ready || !self.contains(pid) {
            return;
        }
        self.used[pid - self.min] = false;
        if pid < self.next {
            // bias the next scan toward the freshly freed pid
            self.next = pid;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of pids in the managed range.
    pub fn capacity(&self) -> usize {
        self.max - self.min + 1
    }

    /// Whether `pid` lies inside the managed range, allocated or not.
    pub fn contains(&self, pid: usize) -> bool {
        self.min <= pid && pid <= self.max
    }

    /// Whether `pid` is currently allocated; `false` for out-of-range pids.
    pub fn is_allocated(&self, pid: usize) -> bool {
        self.contains(pid) && self.used.get(pid - self.min) == Some(&true)
    }
}

impl Default for PidAllocator {
    /// An uninitialized allocator over
    /// [`DEFAULT_MIN_PID`]`..=`[`DEFAULT_MAX_PID`].
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PID,
            max: DEFAULT_MAX_PID,
            used: Vec::new(),
            next: DEFAULT_MIN_PID,
            ready: false,
        }
    }
}

impl Debug for PidAllocator {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.debug_struct("PidAllocator")
            .field("range", &(self.min..=self.max))
            .field("next", &self.next)
            .field("ready", &self.ready)
            .finish()
    }
}
