//! Build metadata
//!
//! Build number and timestamp stamped in by `build.rs`, read by the status tool,
//! the MCP server info and the startup banner.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build timestamp in ISO 8601 format, "unknown" outside a cargo build
pub const BUILD_TIMESTAMP: &str = match option_env!("STEPTRACK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

const BUILD_NUMBER_RAW: Option<&str> = option_env!("STEPTRACK_BUILD_NUMBER");

/// Build number, 0 when missing or malformed
pub fn build_number() -> u64 {
    parse_build_number(BUILD_NUMBER_RAW)
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

fn banner_lines() -> [String; 5] {
    let rule = "=".repeat(47);
    [
        rule.clone(),
        "  Step Tracker (steptrack)".to_string(),
        format!("  Version: {} | Build: {}", VERSION, build_number()),
        format!("  Compiled: {}", BUILD_TIMESTAMP),
        rule,
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    for line in banner_lines() {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("42")), 42);
        assert_eq!(parse_build_number(Some(" 7\n")), 7);
        assert_eq!(parse_build_number(Some("4x2")), 0);
        assert_eq!(parse_build_number(Some("")), 0);
        assert_eq!(parse_build_number(None), 0);
    }

    #[test]
    fn test_banner_mentions_version() {
        let lines = banner_lines();
        assert!(lines[2].contains(VERSION));
        assert!(lines[3].starts_with("  Compiled: "));
    }
}
