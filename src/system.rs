//! System-dependent functions; anything this library cannot do without
//! help from the OS.

#[cfg(any(target_os = "macos", target_os = "ios"))]
extern "C" {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

/// Returns the system's current time, as a tuple of seconds elapsed
/// since the Unix epoch, and the microsecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, i64) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, tv.tv_usec as i64)
}


#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system's current time, as a tuple of seconds elapsed
/// since the Unix epoch, and the microsecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i64) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let hectonanos = file_time_as_u64(&ft) as i64;
    ((hectonanos - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_SEC,
     (hectonanos % HECTONANOSECS_IN_SEC) / 10)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}


/// Returns the system's current time, as a tuple of seconds elapsed
/// since the Unix epoch, and the microsecond of the second.
#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "redox", windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i64) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (tv.tv_sec as i64, (tv.tv_nsec / 1000) as i64)
}

/// Returns the system's current time, as a tuple of seconds elapsed
/// since the Unix epoch, and the microsecond of the second.
#[cfg(target_os = "redox")]
pub(crate) fn sys_time() -> (i64, i64) {
    let mut ts = syscall::TimeSpec::default();
    let _ = syscall::clock_gettime(syscall::CLOCK_REALTIME, &mut ts);
    (ts.tv_sec, (ts.tv_nsec / 1000) as i64)
}
