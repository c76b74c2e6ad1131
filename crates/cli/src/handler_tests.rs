// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn page(url: &str) -> Page {
    Page {
        url: url.to_string(),
        title: "title".to_string(),
        source: "<html></html>".to_string(),
    }
}

#[tokio::test]
async fn appends_one_url_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("log.txt");
    let handler = LogHandler::new(log_path.clone());

    handler.handle(page("https://example.com/a")).await.unwrap();
    handler.handle(page("https://example.com/b")).await.unwrap();

    let contents = tokio::fs::read_to_string(&log_path).await.unwrap();
    assert_eq!(contents, "https://example.com/a\nhttps://example.com/b\n");
}

#[tokio::test]
async fn unwritable_log_path_fails_the_handler() {
    let handler = LogHandler::new(PathBuf::from("/nonexistent/dir/log.txt"));

    let err = handler
        .handle(page("https://example.com"))
        .await
        .expect_err("open must fail");

    assert!(err.to_string().contains("/nonexistent/dir/log.txt"));
}
