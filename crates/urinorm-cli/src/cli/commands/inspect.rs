//! Inspect command: show tier and decoded components of each input.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use urinorm_core::config::OutputFormat;
use urinorm_core::{Tier, UriParts};

use super::for_each_normalized;

#[derive(Serialize)]
struct InspectRecord<'a> {
    input: &'a str,
    uri: String,
    tier: Tier,
    parts: UriParts,
}

pub fn run_inspect<W: Write>(
    inputs: &[String],
    format: OutputFormat,
    fail_fast: bool,
    out: &mut W,
) -> Result<()> {
    let mut first = true;
    for_each_normalized(inputs, fail_fast, |input, normalized| {
        let record = InspectRecord {
            input,
            uri: normalized.uri.to_string(),
            tier: normalized.tier,
            parts: normalized.uri.parts(),
        };
        match format {
            OutputFormat::Text => {
                if !first {
                    writeln!(out)?;
                }
                write_text(out, &record)?;
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&record)?)?,
        }
        first = false;
        Ok(())
    })
}

fn write_text<W: Write>(out: &mut W, record: &InspectRecord<'_>) -> Result<()> {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    writeln!(out, "input:     {}", record.input)?;
    writeln!(out, "tier:      {}", record.tier)?;
    writeln!(out, "uri:       {}", record.uri)?;
    writeln!(out, "scheme:    {}", or_dash(&record.parts.scheme))?;
    writeln!(out, "authority: {}", or_dash(&record.parts.authority))?;
    writeln!(out, "path:      {}", record.parts.path)?;
    writeln!(out, "query:     {}", or_dash(&record.parts.query))?;
    writeln!(out, "fragment:  {}", or_dash(&record.parts.fragment))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_decoded_components() {
        let mut out = Vec::new();
        run_inspect(
            &["http://example.com/a?b c".to_string()],
            OutputFormat::Text,
            false,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("tier:      url\n"));
        assert!(text.contains("uri:       http://example.com/a?b%20c\n"));
        assert!(text.contains("authority: example.com\n"));
        assert!(text.contains("query:     b c\n"));
        assert!(text.contains("fragment:  -\n"));
    }

    #[test]
    fn text_records_are_separated_by_blank_line() {
        let mut out = Vec::new();
        run_inspect(
            &["/a".to_string(), "/b".to_string()],
            OutputFormat::Text,
            false,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("input:").count(), 2);
        assert!(text.contains("fragment:  -\n\ninput:     /b\n"));
    }

    #[test]
    fn json_nests_parts() {
        let mut out = Vec::new();
        run_inspect(
            &["http://example.com/a?b=c#frag".to_string()],
            OutputFormat::Json,
            false,
            &mut out,
        )
        .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(String::from_utf8(out).unwrap().trim()).unwrap();
        assert_eq!(value["tier"], "strict");
        assert_eq!(value["parts"]["scheme"], "http");
        assert_eq!(value["parts"]["fragment"], "frag");
        assert_eq!(value["parts"]["query"], "b=c");
    }
}
