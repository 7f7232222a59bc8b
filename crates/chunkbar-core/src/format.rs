/// Byte-count formatting for the status line.
///
/// Binary units (KiB = 1024) labelled with the short forms users expect
/// from download UIs.

/// Format a byte count into a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else {
        format!("{:.2} GB", b / GB)
    }
}

/// "12.5 MB of 40.0 MB" style pair for transfer totals.
pub fn format_transfer(received: u64, total: u64) -> String {
    format!("{} of {}", format_bytes(received), format_bytes(total))
}
