/// Clock text for progress labels.
///
/// Format selection is keyed on `total_secs`, not on the value being
/// formatted, so the current and total labels always share the same width:
/// `MM:SS` for media under an hour, `HH:MM:SS` otherwise.
pub fn format_clock(total_secs: u64, value_secs: u64) -> String {
    let minutes = value_secs % 3600 / 60;
    let seconds = value_secs % 3600 % 60;

    if total_secs >= 3600 {
        format!("{:02}:{:02}:{:02}", value_secs / 3600, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
