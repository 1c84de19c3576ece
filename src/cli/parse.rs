use trailhead_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
