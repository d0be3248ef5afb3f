#![allow(dead_code)]

use am_core::Article;

/// Article with predictable display fields.
pub fn create_test_article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("About {title}"),
        content: format!("{title} body"),
        author: String::from("Tester"),
        date: String::from("Oct 17, 2026"),
        category: String::from("General"),
        read_time: String::from("1 min read"),
    }
}

pub fn ids_of(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.id.as_str()).collect()
}
