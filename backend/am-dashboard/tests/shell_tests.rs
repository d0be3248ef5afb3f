mod common;

use common::memory_state;

use am_dashboard::shell::{ShellSummary, run};

use googletest::prelude::*;

async fn run_script(script: &str) -> (ShellSummary, String, String) {
    let state = memory_state();
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run(&state, script.as_bytes(), &mut out, &mut err, false)
        .await
        .unwrap();

    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn given_publish_then_list_when_run_then_article_survives_between_lines() {
    // Given
    let script = "sign-in ops@4am.test\n\
                  articles publish --title \"Night shift\" --content \"Notes from 4am\"\n\
                  articles list\n";

    // When
    let (summary, out, err) = run_script(script).await;

    // Then: One JSON document per command; the list holds four articles
    assert_that!(summary, eq(ShellSummary { executed: 3, failed: 0 }));
    assert_that!(err.as_str(), eq(""));
    let lines: Vec<&str> = out.lines().collect();
    assert_that!(lines, len(eq(3)));

    let list: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_that!(list.as_array().map(Vec::len), some(eq(4)));
    assert_that!(list[0]["title"].as_str(), some(eq("Night shift")));
    assert_that!(list[0]["author"].as_str(), some(eq("ops")));
}

#[tokio::test]
async fn given_bad_lines_when_run_then_reported_and_loop_continues() {
    let script = "frobnicate\narticles show missing\nwhoami\n";

    let (summary, out, err) = run_script(script).await;

    assert_that!(summary, eq(ShellSummary { executed: 3, failed: 2 }));
    assert_that!(out.lines().count(), eq(1));
    assert!(err.contains("Error: No article with id 'missing'"), "{err}");
}

#[tokio::test]
async fn given_comments_and_exit_when_run_then_stops_at_exit() {
    let script = "# a comment\n\n   \nwhoami\nexit\nwhoami\n";

    let (summary, out, _) = run_script(script).await;

    assert_that!(summary.executed, eq(1));
    assert_that!(out.lines().count(), eq(1));
}

#[tokio::test]
async fn given_help_when_run_then_help_on_stdout_and_not_failed() {
    let (summary, out, err) = run_script("--help\n").await;

    assert_that!(summary.failed, eq(0));
    assert!(out.contains("sign-in"), "{out}");
    assert_that!(err.as_str(), eq(""));
}

#[tokio::test]
async fn given_unterminated_quote_when_run_then_failed() {
    let (summary, _, err) = run_script("articles show \"abc\n").await;

    assert_that!(summary.failed, eq(1));
    assert!(err.contains("unterminated quote"), "{err}");
}
