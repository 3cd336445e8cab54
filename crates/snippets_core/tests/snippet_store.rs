use snippets_core::db::open_db_in_memory;
use snippets_core::{RepoError, Snippet, SnippetRepository, SnippetService, SqliteSnippetRepository};
use rusqlite::Connection;

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM snippets;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn put_then_get_returns_message() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    let stored = repo.put(&Snippet::new("greeting", "hello")).unwrap();
    assert_eq!(stored, Snippet::new("greeting", "hello"));
    assert_eq!(repo.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn put_same_keyword_twice_upserts_without_duplicate() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("k", "first")).unwrap();
    repo.put(&Snippet::new("k", "second")).unwrap();

    assert_eq!(repo.get("k").unwrap().as_deref(), Some("second"));
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn put_upsert_overwrites_hidden_flag() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::hidden("k", "secret")).unwrap();
    assert!(repo.catalog().unwrap().is_empty());

    repo.put(&Snippet::new("k", "public")).unwrap();
    assert_eq!(repo.catalog().unwrap(), vec!["k".to_string()]);
}

#[test]
fn missing_keyword_yields_none_and_no_mutation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();
    repo.put(&Snippet::new("present", "body")).unwrap();

    assert_eq!(repo.get("absent").unwrap(), None);
    assert_eq!(repo.patch("absent", "anything").unwrap(), None);
    assert_eq!(repo.delete("absent").unwrap(), None);

    assert_eq!(row_count(&conn), 1);
    assert_eq!(repo.get("present").unwrap().as_deref(), Some("body"));
}

#[test]
fn empty_message_is_distinct_from_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("blank", "")).unwrap();
    repo.put(&Snippet::new("literal", "404: Snippet Not Found")).unwrap();

    assert_eq!(repo.get("blank").unwrap().as_deref(), Some(""));
    assert_eq!(
        repo.get("literal").unwrap().as_deref(),
        Some("404: Snippet Not Found")
    );
    assert_eq!(repo.get("missing").unwrap(), None);
}

#[test]
fn delete_then_get_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("gone", "soon")).unwrap();
    assert_eq!(repo.delete("gone").unwrap().as_deref(), Some("gone"));
    assert_eq!(repo.get("gone").unwrap(), None);
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn patch_keeps_hidden_flag_and_returns_updated_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::hidden("secret", "v1")).unwrap();
    let updated = repo.patch("secret", "v2").unwrap().unwrap();

    assert_eq!(updated, Snippet::hidden("secret", "v2"));
    assert_eq!(repo.get("secret").unwrap().as_deref(), Some("v2"));
}

#[test]
fn catalog_is_sorted_and_skips_hidden() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    for keyword in ["b", "a", "c"] {
        repo.put(&Snippet::new(keyword, "x")).unwrap();
    }
    repo.put(&Snippet::hidden("aa", "x")).unwrap();

    assert_eq!(repo.catalog().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn catalog_of_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    assert!(repo.catalog().unwrap().is_empty());
}

#[test]
fn search_matches_substring_of_visible_keywords() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("keyword", "x")).unwrap();
    repo.put(&Snippet::new("other", "y")).unwrap();
    repo.put(&Snippet::hidden("hidden-key", "z")).unwrap();

    let hits = repo.search("key").unwrap();
    assert_eq!(hits, vec![Snippet::new("keyword", "x")]);
}

#[test]
fn search_treats_pattern_characters_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("discount 50%", "a")).unwrap();
    repo.put(&Snippet::new("discount 500", "b")).unwrap();
    repo.put(&Snippet::new("snake_case", "c")).unwrap();
    repo.put(&Snippet::new("snakeXcase", "d")).unwrap();

    let percent = repo.search("50%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].keyword, "discount 50%");

    let underscore = repo.search("e_c").unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].keyword, "snake_case");
}

#[test]
fn search_is_case_sensitive_and_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    repo.put(&Snippet::new("zeta-Key", "1")).unwrap();
    repo.put(&Snippet::new("alpha-key", "2")).unwrap();
    repo.put(&Snippet::new("beta-key", "3")).unwrap();

    let keywords: Vec<String> = repo
        .search("key")
        .unwrap()
        .into_iter()
        .map(|snippet| snippet.keyword)
        .collect();
    assert_eq!(keywords, vec!["alpha-key", "beta-key"]);
    assert!(repo.search("nothing").unwrap().is_empty());
}

#[test]
fn put_rejects_blank_keyword() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnippetRepository::try_new(&conn).unwrap();

    let err = repo.put(&Snippet::new("  ", "body")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteSnippetRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}

#[test]
fn service_walks_full_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let service = SnippetService::new(SqliteSnippetRepository::try_new(&conn).unwrap());

    assert_eq!(
        service.put("greeting", "hello", false).unwrap(),
        Snippet::new("greeting", "hello")
    );
    assert_eq!(service.get("greeting").unwrap().as_deref(), Some("hello"));
    assert_eq!(
        service.patch("greeting", "hi").unwrap(),
        Some(Snippet::new("greeting", "hi"))
    );
    assert_eq!(service.get("greeting").unwrap().as_deref(), Some("hi"));
    assert_eq!(service.delete("greeting").unwrap().as_deref(), Some("greeting"));
    assert_eq!(service.get("greeting").unwrap(), None);
}
