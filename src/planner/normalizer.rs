// ABOUTME: Model response normalizer stripping markup artifacts and parsing JSON
// ABOUTME: Isolates the pipeline from provider formatting quirks like code fences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Model Response Normalizer
//!
//! Generative models asked for bare JSON still routinely wrap their
//! output in Markdown code fences, with or without a language tag. The
//! normalizer tolerates every combination of those markers being present
//! or absent, then parses the cleaned text into the caller's expected
//! shape. A parse failure after cleaning is a hard error; the raw
//! response is logged in full for post-mortem triage, since model
//! non-compliance is the most likely transient upstream failure.

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use tracing::error;

/// Strip surrounding Markdown code-fence markers, if any
///
/// Handles a leading ```` ```json ```` (language-tagged) or bare
/// ```` ``` ```` marker and a trailing ```` ``` ```` marker, in any
/// combination, and trims surrounding whitespace.
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Normalize raw model output into a structured value
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::MalformedAiResponse`] when the
/// cleaned text is not valid JSON of the expected shape; the raw
/// response is logged at the failure point.
pub fn parse_model_json<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    let cleaned = strip_code_fences(raw);

    serde_json::from_str(cleaned).map_err(|e| {
        error!("Failed to parse AI response as JSON: {e}\nResponse: {raw}");
        AppError::malformed_ai_response("Failed to parse AI response")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_strip_tagged_fence() {
        assert_eq!(strip_code_fences("```json\n[1,2,3]\n```"), "[1,2,3]");
    }

    #[test]
    fn test_strip_bare_fence() {
        assert_eq!(strip_code_fences("```\n[1,2,3]\n```"), "[1,2,3]");
    }

    #[test]
    fn test_strip_opening_fence_only() {
        assert_eq!(strip_code_fences("```json\n[1,2,3]"), "[1,2,3]");
    }

    #[test]
    fn test_strip_closing_fence_only() {
        assert_eq!(strip_code_fences("[1,2,3]\n```"), "[1,2,3]");
    }

    #[test]
    fn test_unfenced_text_passes_through() {
        assert_eq!(strip_code_fences("  [1,2,3]  "), "[1,2,3]");
    }

    #[test]
    fn test_fenced_and_bare_parse_identically() {
        let fenced: Vec<i64> = parse_model_json("```json\n[1,2,3]\n```").unwrap();
        let bare: Vec<i64> = parse_model_json("[1,2,3]").unwrap();
        assert_eq!(fenced, bare);
        assert_eq!(fenced, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_object() {
        let value: serde_json::Value =
            parse_model_json("```json\n{\"stops\": []}\n```").unwrap();
        assert!(value["stops"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_text_is_malformed_response() {
        let result: AppResult<Vec<i64>> = parse_model_json("I'd be happy to help!");
        let error = result.unwrap_err();
        assert_eq!(error.code, ErrorCode::MalformedAiResponse);
    }

    #[test]
    fn test_shape_mismatch_is_malformed_response() {
        // Valid JSON, wrong shape for the caller's expectation
        let result: AppResult<Vec<i64>> = parse_model_json("{\"not\": \"an array\"}");
        assert_eq!(result.unwrap_err().code, ErrorCode::MalformedAiResponse);
    }
}
