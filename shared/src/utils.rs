//! # Shared Utility Functions
//!
//! Address display helpers used by the core's log lines and the browser crate.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(truncate_address(address), "0x5aAe...BeAed");
//! ```

/// Format an address by keeping the first `prefix_len` and last `suffix_len` characters.
///
/// A `0x` prefix is not counted towards `prefix_len`. Addresses too short to
/// shorten are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 4, 4), "0x5aAe...eAed");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (hex_prefix, body) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    // Addresses are ASCII (hex or base58), so byte slicing is safe
    if !body.is_ascii() || body.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}{}...{}",
        hex_prefix,
        &body[..prefix_len],
        &body[body.len() - suffix_len..]
    )
}

/// Format an address with a 4-character head and 5-character tail.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 5)
}
