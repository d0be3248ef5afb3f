use crate::models::article::{EXCERPT_CHARS, derive_excerpt, estimate_read_time};
use crate::{Article, ArticleDraft};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use proptest::prelude::*;

fn draft(content: &str) -> ArticleDraft {
    ArticleDraft {
        title: "Night shift growth".into(),
        excerpt: String::new(),
        content: content.into(),
        category: "Strategy".into(),
    }
}

#[test]
fn given_draft_when_composed_then_copies_author_and_formats_date() {
    // Given
    let now = Utc.with_ymd_and_hms(2026, 10, 7, 4, 0, 0).unwrap();

    // When
    let article = Article::compose(draft("short body"), "Ada", now);

    // Then
    assert_that!(article.author.as_str(), eq("Ada"));
    assert_that!(article.date.as_str(), eq("Oct 7, 2026"));
    assert_that!(article.read_time.as_str(), eq("1 min read"));
    assert_that!(article.category.as_str(), eq("Strategy"));
    assert!(article.has_id());
}

#[test]
fn given_two_drafts_when_composed_then_ids_differ() {
    let now = Utc::now();

    let a = Article::compose(draft("a"), "Ada", now);
    let b = Article::compose(draft("b"), "Ada", now);

    assert_ne!(a.id, b.id);
}

#[test]
fn given_explicit_excerpt_when_composed_then_excerpt_is_kept() {
    let mut d = draft("body text");
    d.excerpt = "teaser".into();

    let article = Article::compose(d, "Ada", Utc::now());

    assert_that!(article.excerpt.as_str(), eq("teaser"));
}

#[test]
fn given_long_body_when_deriving_excerpt_then_truncates_with_ellipsis() {
    let body = "é".repeat(EXCERPT_CHARS + 10);

    let excerpt = derive_excerpt(&body);

    assert_that!(excerpt.chars().count(), eq(EXCERPT_CHARS + 1));
    assert!(excerpt.ends_with('…'));
}

#[test]
fn given_401_words_when_estimating_read_time_then_rounds_up() {
    let body = vec!["word"; 401].join(" ");

    assert_that!(estimate_read_time(&body).as_str(), eq("3 min read"));
}

#[test]
fn given_blank_id_when_has_id_then_false() {
    let article: Article = serde_json::from_str(r#"{"id":"  ","title":"x"}"#).unwrap();

    assert!(!article.has_id());
}

#[test]
fn given_blank_title_when_validating_draft_then_error() {
    let mut d = draft("body");
    d.title = " ".into();

    assert_that!(d.validate(), err(anything()));
}

#[test]
fn given_blank_content_when_validating_draft_then_error() {
    assert_that!(draft("").validate(), err(anything()));
}

proptest! {
    #[test]
    fn given_any_body_when_estimating_read_time_then_at_least_one_minute(body in ".{0,2000}") {
        let estimate = estimate_read_time(&body);
        let minutes: usize = estimate.trim_end_matches(" min read").parse().unwrap();
        prop_assert!(minutes >= 1);
    }

    #[test]
    fn given_any_body_when_deriving_excerpt_then_never_longer_than_limit(body in ".{0,400}") {
        let excerpt = derive_excerpt(&body);
        prop_assert!(excerpt.chars().count() <= EXCERPT_CHARS + 1);
    }
}
