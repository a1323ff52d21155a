//! Batch analysis over a bounded worker pool
//!
//! Input is one complaint per line: either a JSON request object
//! (`{"id": "...", "text": "...", "shop_name": "..."}`) or plain text.
//! Output is one JSON result per line, in input order.

use anyhow::{Context, Result};
use complaint_triage_core::{AnalysisResult, ComplaintRequest};
use complaint_triage_text_processing::{AnalyzeOptions, ComplaintAnalyzer};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Parse batch input. Blank lines are skipped; a line starting with `{`
/// must be a valid request object.
pub fn parse_requests(input: &str) -> Result<Vec<ComplaintRequest>> {
    let mut requests = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let request = if line.starts_with('{') {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid complaint request on line {}", index + 1))?
        } else {
            ComplaintRequest::new(line)
        };
        requests.push(request);
    }
    Ok(requests)
}

/// Analyze `requests` with up to `workers` analyses in flight, keeping
/// input order in the output
pub async fn run_batch(
    analyzer: Arc<ComplaintAnalyzer>,
    requests: Vec<ComplaintRequest>,
    options: AnalyzeOptions,
    workers: usize,
) -> Result<Vec<AnalysisResult>> {
    let total = requests.len();
    tracing::info!(total, workers, "Starting batch analysis");

    let results: Vec<AnalysisResult> = stream::iter(requests)
        .map(|request| {
            let analyzer = analyzer.clone();
            tokio::task::spawn_blocking(move || analyzer.analyze_request(&request, options))
        })
        .buffered(workers.max(1))
        .try_collect::<Vec<_>>()
        .await
        .context("Analysis worker failed")?;

    let invalid = results.iter().filter(|r| !r.validity.is_valid).count();
    tracing::info!(total, invalid, "Batch analysis complete");
    Ok(results)
}

/// One JSON object per line, newline terminated
pub fn render_json_lines(results: &[AnalysisResult]) -> Result<String> {
    let mut out = String::new();
    for result in results {
        out.push_str(&result.to_json_line()?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use complaint_triage_core::{Language, PriorityLevel};

    #[test]
    fn test_parse_requests() {
        let input = r#"
{"id": "1", "text": "The rice was rotten", "shop_name": "Karim Store"}

Dokan er dam onek beshi
{"complaint_text": ""}
"#;
        let requests = parse_requests(input).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].id.as_deref(), Some("1"));
        assert_eq!(requests[0].context.shop_name.as_deref(), Some("Karim Store"));
        assert_eq!(requests[1].text, "Dokan er dam onek beshi");
        assert_eq!(requests[2].text, "");
    }

    #[test]
    fn test_parse_rejects_broken_json() {
        let err = parse_requests("ok line\n{\"text\": ").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[tokio::test]
    async fn test_run_batch_keeps_order() {
        let analyzer = Arc::new(ComplaintAnalyzer::default());
        let texts = [
            "জরুরি! আমার বাচ্চা এই দোকানের পণ্য খেয়ে অসুস্থ হয়েছে।",
            "",
            "Ami ei shop theke kharap product kinechi. Dam o beshi niche.",
            "aaaa bbbb cccc dddd eeee ffff gggg",
        ];
        let requests: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| ComplaintRequest {
                id: Some(i.to_string()),
                ..ComplaintRequest::new(*text)
            })
            .collect();

        let results = run_batch(analyzer, requests, AnalyzeOptions::default(), 3)
            .await
            .unwrap();

        assert_eq!(results.len(), 4);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.id, Some(i.to_string()));
            assert_eq!(result.original_text, texts[i]);
        }
        assert_eq!(results[0].priority.level, PriorityLevel::Urgent);
        assert!(!results[1].validity.is_valid);
        assert_eq!(results[2].language, Language::Mixed);
        assert!(results[3].validity.is_gibberish);
    }

    #[tokio::test]
    async fn test_run_batch_empty_input() {
        let analyzer = Arc::new(ComplaintAnalyzer::default());
        let results = run_batch(analyzer, Vec::new(), AnalyzeOptions::default(), 4)
            .await
            .unwrap();
        assert!(results.is_empty());
        assert_eq!(render_json_lines(&results).unwrap(), "");
    }

    #[test]
    fn test_render_json_lines() {
        let analyzer = ComplaintAnalyzer::default();
        let results = vec![analyzer.analyze("first complaint"), analyzer.analyze("second")];
        let rendered = render_json_lines(&results).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["original_text"], "second");
    }
}
