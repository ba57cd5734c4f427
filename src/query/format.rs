/// Human-readable size for a value in megabytes.
pub fn format_file_size(mb: f64) -> String {
    if mb < 1.0 {
        format!("{:.1} KB", mb * 1024.0)
    } else {
        format!("{:.1} MB", mb)
    }
}
