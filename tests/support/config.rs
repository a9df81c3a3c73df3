use std::io::Write;

use tempfile::NamedTempFile;

/// Valid configuration using the log transport.
pub const BASE_TOML: &str = r#"
symbols = ["AAPL", "TSLA", "MSFT"]

[thresholds]
drop_pct = 10
pattern_pct = 50
pattern_period = "daily"

[notifier]
kind = "log"
"#;

/// Write `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("stockwatch-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}
