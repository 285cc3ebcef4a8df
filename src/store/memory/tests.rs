use super::*;

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password_hash: "$argon2id$fake".to_owned(),
        avatar: None,
    }
}

#[tokio::test]
async fn create_and_find_user() {
    let store = MemoryStore::new();
    let created = store.create_user(new_user("alice", "a@x.com")).await
        .expect("user creation failed");

    let by_id = store.user_by_id(created.id).await.unwrap();
    assert_eq!(by_id, Some(created.clone()));
    let by_name = store.user_by_username("alice").await.unwrap();
    assert_eq!(by_name, Some(created));
    assert_eq!(store.user_by_username("bob").await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_username_rejected() {
    let store = MemoryStore::new();
    store.create_user(new_user("alice", "a@x.com")).await.unwrap();
    let err = store.create_user(new_user("alice", "other@x.com")).await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::Duplicate { constraint: "username" }),
        "wrong error type: {err:#?}",
    );
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let store = MemoryStore::new();
    store.create_user(new_user("alice", "a@x.com")).await.unwrap();
    let err = store.create_user(new_user("bob", "a@x.com")).await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::Duplicate { constraint: "email" }),
        "wrong error type: {err:#?}",
    );
}

#[tokio::test]
async fn find_by_either_identifier() {
    let store = MemoryStore::new();
    let alice = store.create_user(new_user("alice", "a@x.com")).await.unwrap();

    let by_name = store
        .user_by_username_or_email(Some("alice"), None).await.unwrap();
    assert_eq!(by_name, Some(alice.clone()));
    let by_email = store
        .user_by_username_or_email(None, Some("a@x.com")).await.unwrap();
    assert_eq!(by_email, Some(alice));
    let neither = store
        .user_by_username_or_email(Some("bob"), Some("b@x.com")).await.unwrap();
    assert_eq!(neither, None);
}

#[tokio::test]
async fn favorite_push_pull_keeps_count_in_sync() {
    let store = MemoryStore::new();
    let author = Uuid::new_v4();
    let fan = Uuid::new_v4();
    let note = store.create_note(author, "hello".to_owned()).await.unwrap();
    assert_eq!(note.favorite_count, 0);

    let note = store.add_favorite(note.id, fan).await.unwrap();
    assert_eq!(note.favorited_by, vec![fan]);
    assert_eq!(note.favorite_count, 1);

    let note = store.remove_favorite(note.id, fan).await.unwrap();
    assert!(note.favorited_by.is_empty());
    assert_eq!(note.favorite_count, 0);
}

#[tokio::test]
async fn mutations_on_absent_note_fail() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();
    let user = Uuid::new_v4();

    let err = store.set_content(id, "x".to_owned()).await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
    let err = store.add_favorite(id, user).await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
    let err = store.delete_note(id).await.expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn set_content_bumps_updated_at() {
    let store = MemoryStore::new();
    let note = store.create_note(Uuid::new_v4(), "before".to_owned()).await.unwrap();
    let updated = store.set_content(note.id, "after".to_owned()).await.unwrap();
    assert_eq!(updated.content, "after");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at >= note.updated_at);
}

#[tokio::test]
async fn feed_pages_are_disjoint_and_exhaustive() {
    let store = MemoryStore::new();
    let author = Uuid::new_v4();
    let mut all_ids = Vec::new();
    for i in 0..25 {
        let note = store.create_note(author, format!("note {i}")).await.unwrap();
        all_ids.push(note.id);
    }

    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let (page, has_next_page) = store.feed_page(cursor, 10).await.unwrap();
        // newest-first within the page
        for pair in page.windows(2) {
            assert!(pair[0].feed_key() > pair[1].feed_key());
        }
        cursor = page.last().map(|n| n.id);
        seen.extend(page.into_iter().map(|n| n.id));
        if !has_next_page {
            break;
        }
    }

    seen.sort();
    all_ids.sort();
    assert_eq!(seen, all_ids, "pages must cover every note exactly once");
}

#[tokio::test]
async fn feed_page_sizes() {
    let store = MemoryStore::new();
    let author = Uuid::new_v4();
    for i in 0..12 {
        store.create_note(author, format!("note {i}")).await.unwrap();
    }

    let (page, has_next_page) = store.feed_page(None, 10).await.unwrap();
    assert_eq!(page.len(), 10);
    assert!(has_next_page);

    let (page, has_next_page) = store
        .feed_page(page.last().map(|n| n.id), 10).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(!has_next_page);
}

#[tokio::test]
async fn stale_feed_cursor_yields_empty_page() {
    let store = MemoryStore::new();
    store.create_note(Uuid::new_v4(), "hello".to_owned()).await.unwrap();

    let (page, has_next_page) = store.feed_page(Some(Uuid::new_v4()), 10).await.unwrap();
    assert!(page.is_empty());
    assert!(!has_next_page);
}
