mod common;

use common::{create_test_article, ids_of};

use am_content::{ContentStore, Mutation, SkipReason};

use googletest::prelude::*;

#[test]
fn given_two_articles_when_third_added_then_it_comes_first() {
    // Given: [A, B]
    let store = ContentStore::new(vec![
        create_test_article("a", "A"),
        create_test_article("b", "B"),
    ]);

    // When: Adding C
    let outcome = store.add(create_test_article("c", "C")).unwrap();

    // Then: [C, A, B]
    assert_that!(outcome, eq(Mutation::Applied));
    assert_eq!(ids_of(&store.articles()), vec!["c", "a", "b"]);
}

#[test]
fn given_collection_when_article_updated_then_replaced_in_place() {
    // Given: [C, A, B]
    let store = ContentStore::new(vec![
        create_test_article("c", "C"),
        create_test_article("a", "A"),
        create_test_article("b", "B"),
    ]);

    // When: Updating B
    let outcome = store.update(create_test_article("b", "B prime")).unwrap();

    // Then: [C, A, B'] with B' in the last slot
    assert_that!(outcome, eq(Mutation::Applied));
    let articles = store.articles();
    assert_eq!(ids_of(&articles), vec!["c", "a", "b"]);
    assert_that!(articles[2].title.as_str(), eq("B prime"));
}

#[test]
fn given_collection_when_article_removed_then_others_keep_order() {
    let store = ContentStore::new(vec![
        create_test_article("c", "C"),
        create_test_article("a", "A"),
        create_test_article("b", "B"),
    ]);

    let outcome = store.remove("a").unwrap();

    assert_that!(outcome, eq(Mutation::Applied));
    assert_eq!(ids_of(&store.articles()), vec!["c", "b"]);
}

#[test]
fn given_malformed_input_when_mutating_then_collection_unchanged() {
    // Given
    let store = ContentStore::new(vec![
        create_test_article("a", "A"),
        create_test_article("b", "B"),
    ]);
    let before = store.articles();

    // When
    let add_none = store.add(None).unwrap();
    let remove_blank = store.remove("").unwrap();
    let update_blank = store.update(create_test_article("", "Nobody")).unwrap();
    let update_missing = store.update(create_test_article("zzz", "Ghost")).unwrap();

    // Then
    assert_that!(add_none, eq(Mutation::Skipped(SkipReason::MissingArticle)));
    assert_that!(remove_blank, eq(Mutation::Skipped(SkipReason::MissingId)));
    assert_that!(update_blank, eq(Mutation::Skipped(SkipReason::MissingId)));
    assert_that!(update_missing, eq(Mutation::Skipped(SkipReason::NotFound)));
    assert_eq!(store.articles(), before);
}

#[test]
fn given_seed_json_when_loaded_then_store_holds_valid_entries() {
    let store = ContentStore::from_seed_json(r#"[{"id":"x","title":"X"},{"title":"no id"}]"#);

    assert_that!(store.len(), eq(1));
    assert_that!(store.find("x"), some(anything()));
}

#[test]
fn given_garbage_seed_when_loaded_then_store_empty() {
    let store = ContentStore::from_seed_json("definitely not json");

    assert_that!(store.is_empty(), eq(true));
}
