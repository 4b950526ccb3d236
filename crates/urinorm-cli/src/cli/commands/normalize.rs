//! Normalize command: print the normalized URI of each input.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use urinorm_core::config::OutputFormat;
use urinorm_core::Tier;

use super::for_each_normalized;

#[derive(Serialize)]
struct NormalizeRecord<'a> {
    input: &'a str,
    uri: String,
    tier: Tier,
}

pub fn run_normalize<W: Write>(
    inputs: &[String],
    format: OutputFormat,
    fail_fast: bool,
    out: &mut W,
) -> Result<()> {
    for_each_normalized(inputs, fail_fast, |input, normalized| {
        match format {
            OutputFormat::Text => writeln!(out, "{}", normalized.uri)?,
            OutputFormat::Json => {
                let record = NormalizeRecord {
                    input,
                    uri: normalized.uri.to_string(),
                    tier: normalized.tier,
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn text_prints_one_uri_per_line() {
        let mut out = Vec::new();
        run_normalize(
            &inputs(&["http://example.com/a?b c#frag", "/a/b?x=1"]),
            OutputFormat::Text,
            false,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://example.com/a?b%20c\n/a/b?x=1\n"
        );
    }

    #[test]
    fn json_reports_tier() {
        let mut out = Vec::new();
        run_normalize(&inputs(&["/a b"]), OutputFormat::Json, false, &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["input"], "/a b");
        assert_eq!(value["uri"], "/a%20b");
        assert_eq!(value["tier"], "relative");
    }

    #[test]
    fn failures_are_counted_but_do_not_stop_the_run() {
        let mut out = Vec::new();
        let err = run_normalize(
            &inputs(&["http://[::1", "/ok"]),
            OutputFormat::Text,
            false,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), "/ok\n");
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let mut out = Vec::new();
        let err = run_normalize(
            &inputs(&["http://[::1", "/ok"]),
            OutputFormat::Text,
            true,
            &mut out,
        )
        .unwrap_err();
        assert!(out.is_empty());
        assert!(err.to_string().contains("http://[::1"));
    }
}
