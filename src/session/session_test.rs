use super::*;
use crate::navigation::NavigationLog;

fn user(role: &str) -> User {
    User { id: 7, name: "Ada".into(), email: "ada@example.com".into(), role: role.into() }
}

fn empty_store() -> SessionStore {
    SessionStore::open(MemoryStorage::new())
}

// =============================================================
// token / is_authenticated
// =============================================================

#[test]
fn not_authenticated_without_token() {
    let store = empty_store();
    assert_eq!(store.token(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn authenticated_after_set_token() {
    let store = empty_store();
    store.set_token("opaque-token").unwrap();
    assert_eq!(store.token().as_deref(), Some("opaque-token"));
    assert!(store.is_authenticated());
}

#[test]
fn empty_token_counts_as_absent() {
    let store = empty_store();
    store.set_token("").unwrap();
    assert!(!store.is_authenticated());
}

#[test]
fn token_without_user_is_still_authenticated() {
    let store = empty_store();
    store.set_token("t").unwrap();
    assert!(store.is_authenticated());
    assert!(store.user().is_none());
}

// =============================================================
// user / is_admin
// =============================================================

#[test]
fn not_admin_without_user() {
    let store = empty_store();
    store.set_token("t").unwrap();
    assert!(!store.is_admin());
}

#[test]
fn not_admin_for_other_roles() {
    let store = empty_store();
    store.set_token("t").unwrap();
    for role in ["USER", "admin", "Admin", "ADMIN ", ""] {
        store.set_user(&user(role)).unwrap();
        assert!(!store.is_admin(), "role {role:?} must not be admin");
    }
}

#[test]
fn admin_on_exact_role() {
    let store = empty_store();
    store.set_token("t").unwrap();
    store.set_user(&user("ADMIN")).unwrap();
    assert!(store.is_admin());
}

#[test]
fn user_round_trips_through_storage() {
    let store = empty_store();
    store.set_token("t").unwrap();
    store.set_user(&user("USER")).unwrap();
    assert_eq!(store.user(), Some(user("USER")));
}

#[test]
fn malformed_user_reads_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t").unwrap();
    storage.set(USER_KEY, "{\"id\": oops").unwrap();
    let store = SessionStore::open(storage);
    assert!(store.user().is_none());
    assert!(!store.is_admin());
    assert!(store.is_authenticated());
}

// =============================================================
// open / clear / logout
// =============================================================

#[test]
fn open_drops_user_without_token() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, &serde_json::to_string(&user("ADMIN")).unwrap()).unwrap();
    let store = SessionStore::open(storage);
    assert!(store.user().is_none());
    assert!(!store.is_admin());
}

#[test]
fn open_restores_existing_session() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t").unwrap();
    storage.set(USER_KEY, &serde_json::to_string(&user("ADMIN")).unwrap()).unwrap();
    let store = SessionStore::open(storage);
    assert!(store.is_authenticated());
    assert!(store.is_admin());
}

#[test]
fn clear_removes_token_and_user() {
    let store = empty_store();
    store.set_token("t").unwrap();
    store.set_user(&user("ADMIN")).unwrap();
    store.clear().unwrap();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

#[test]
fn logout_clears_and_navigates_fully_to_login() {
    let store = empty_store();
    store.set_token("t").unwrap();
    store.set_user(&user("ADMIN")).unwrap();
    let nav = NavigationLog::new();

    store.logout(&nav).unwrap();

    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert_eq!(nav.entries(), vec![(LOGIN_PATH.to_owned(), NavigationKind::Full)]);
}

#[test]
fn logout_without_session_still_navigates() {
    let store = empty_store();
    let nav = NavigationLog::new();
    store.logout(&nav).unwrap();
    assert_eq!(nav.last(), Some((LOGIN_PATH.to_owned(), NavigationKind::Full)));
}

#[test]
fn close_flushes_without_error() {
    let store = empty_store();
    store.set_token("t").unwrap();
    store.close().unwrap();
}

// =============================================================
// auth_headers
// =============================================================

#[test]
fn headers_without_token_have_only_content_type() {
    let store = empty_store();
    let headers = store.auth_headers().unwrap();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(headers.get(AUTHORIZATION).is_none());
    assert_eq!(headers.len(), 1);
}

#[test]
fn headers_with_token_carry_bearer() {
    let store = empty_store();
    store.set_token("abc.def").unwrap();
    let headers = store.auth_headers().unwrap();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def");
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
}

#[test]
fn headers_reject_token_with_control_chars() {
    let store = empty_store();
    store.set_token("bad\ntoken").unwrap();
    assert!(matches!(store.auth_headers(), Err(SessionError::InvalidToken)));
}

#[test]
fn json_headers_have_no_authorization() {
    let headers = json_headers();
    assert_eq!(headers.len(), 1);
    assert!(headers.get(AUTHORIZATION).is_none());
}
