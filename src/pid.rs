//! The single-authority pattern over [`PidAllocator`]: one global instance
//! behind a lock, handed out as RAII handles. Callers that need their own
//! namespace construct a private [`PidAllocator`] instead.

use lazy_static::lazy_static;
use spin::Mutex;

use crate::allocator::PidAllocator;
use crate::error::AllocResult;

lazy_static! {
    static ref PID_ALLOCATOR: Mutex<PidAllocator> = Mutex::new(PidAllocator::default());
}

/// Owned pid backed by the global allocator, released on drop.
#[derive(Debug)]
pub struct PidHandle(pub usize);

impl Drop for PidHandle {
    fn drop(&mut self) {
        debug!("pid {} dropped", self.0);
        PID_ALLOCATOR.lock().dealloc(self.0);
    }
}

/// (Re)initializes the global pid table. Must be called once before
/// [`alloc_pid`]; calling it again frees every outstanding pid at once.
pub fn init() -> AllocResult {
    let mut allocator = PID_ALLOCATOR.lock();
    allocator.init()?;
    info!(
        "pid table ready, range [{}, {}]",
        allocator.min(),
        allocator.max()
    );
    Ok(())
}

pub fn alloc_pid() -> AllocResult<PidHandle> {
    let pid = PID_ALLOCATOR.lock().alloc()?;
    debug!("pid {} allocated", pid);
    Ok(PidHandle(pid))
}

/// Snapshot query against the global allocator.
pub fn is_allocated(pid: usize) -> bool {
    PID_ALLOCATOR.lock().is_allocated(pid)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::config::DEFAULT_MIN_PID;

    #[test]
    #[serial]
    fn handle_drop_releases_the_pid() {
        init().unwrap();
        let pid = {
            let handle = alloc_pid().unwrap();
            assert!(is_allocated(handle.0));
            handle.0
        };
        assert!(!is_allocated(pid));
    }

    #[test]
    #[serial]
    fn reinit_forgets_outstanding_pids() {
        init().unwrap();
        let first = alloc_pid().unwrap();
        assert_eq!(first.0, DEFAULT_MIN_PID);
        init().unwrap();
        assert!(!is_allocated(first.0));
        // a stale handle from before the reset releases an already-free
        // pid, which stays a no-op
        drop(first);
        assert_eq!(alloc_pid().unwrap().0, DEFAULT_MIN_PID);
    }
}
