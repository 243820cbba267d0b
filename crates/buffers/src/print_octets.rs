//! Debug utility for printing octets as hex strings.

/// Formats at most `max` bytes as lowercase hex pairs for log lines, noting
/// how many bytes were left out.
///
/// # Example
///
/// ```
/// use devsuite_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// [`print_octets`] with a limit of 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}
