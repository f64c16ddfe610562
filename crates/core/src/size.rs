const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Human-readable binary size with `precision` decimals. Values past the last
/// unit stay in PiB with a growing mantissa.
pub fn format_size(bytes: u64, precision: usize) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.precision$} {}", UNITS[unit])
}

pub fn human_size(bytes: u64) -> String {
    format_size(bytes, 2)
}
