//! API shape tests — validates that response JSON matches what clients of
//! the original citation API expect.
//!
//! These assert field names and types on representative payloads rather than
//! spinning up an HTTP server.

/// POST /api/citation/lookup success shape:
/// { success, original_citation, candidates, best_match }
#[test]
fn test_lookup_response_shape() {
    let response = serde_json::json!({
        "success": true,
        "original_citation": "Genesis 1:1-3",
        "candidates": [
            {
                "source": "bible:esv",
                "confidence": 0.943,
                "text": "1 In the beginning, God created the heavens and the earth.",
                "metadata": {
                    "book": "Genesis",
                    "chapter": 1,
                    "verses": "1-3",
                    "translation": "ESV",
                    "source": "bible_api",
                },
            }
        ],
        "best_match": {
            "source": "bible:esv",
            "confidence": 0.943,
        },
    });

    assert!(response["success"].is_boolean());
    assert!(response["original_citation"].is_string());
    assert!(response["candidates"].is_array());
    let candidate = &response["candidates"][0];
    assert!(candidate["source"].is_string());
    assert!(candidate["confidence"].is_number());
    assert!(candidate["text"].is_string());
    assert!(candidate["metadata"].is_object());
    assert!(response["best_match"].is_object());
}

/// Empty citation input is a client error with an empty candidate list:
/// { error, candidates: [] }
#[test]
fn test_lookup_error_shape() {
    let response = serde_json::json!({
        "error": "Citation text is required",
        "candidates": [],
    });

    assert!(response["error"].is_string());
    assert!(response["candidates"].as_array().unwrap().is_empty());
}

/// GET /api/citation/health shape.
#[test]
fn test_health_shape() {
    let response = serde_json::json!({
        "status": "healthy",
        "service": "passage_extraction_api",
        "version": "0.1.0",
    });

    assert_eq!(response["status"], "healthy");
    assert!(response["service"].is_string());
    assert!(response["version"].is_string());
}

/// GET /api/citation/engine-info shape.
#[test]
fn test_engine_info_shape() {
    let response = serde_json::json!({
        "literary_works": 12,
        "biblical_translations": ["ESV", "KJV", "NASB", "NIV", "NRSV"],
        "corpus_path": "test_corpus",
        "available_works": ["absalom_and_achitophel", "paradise_lost"],
    });

    assert!(response["literary_works"].is_number());
    assert!(response["biblical_translations"].is_array());
    assert!(response["corpus_path"].is_string());
    assert!(response["available_works"].is_array());
}
