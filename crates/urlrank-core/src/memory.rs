//! Peak resident memory of the current process, for the run summary.

/// Peak resident set size in bytes, or `None` where the platform does not report it.
#[cfg(unix)]
pub fn peak_rss_bytes() -> Option<u64> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let r = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    if r != 0 {
        tracing::debug!(errno = r, "getrusage failed");
        return None;
    }
    let maxrss = u64::try_from(usage.ru_maxrss).ok()?;
    // Linux reports kilobytes, macOS reports bytes.
    if cfg!(target_os = "macos") {
        Some(maxrss)
    } else {
        Some(maxrss * 1024)
    }
}

#[cfg(not(unix))]
pub fn peak_rss_bytes() -> Option<u64> {
    None
}

/// Human-readable MiB string, e.g. `12.50 MiB`.
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2} MiB", bytes as f64 / 1_048_576.0)
}
