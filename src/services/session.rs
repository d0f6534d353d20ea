use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::Article;

/// In-process session state: who has passed the password gate, and the most
/// recent result set for each session. Nothing here survives a restart, and
/// results are replaced wholesale on every new submission.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

#[derive(Default)]
struct Session {
    articles: Option<Vec<Article>>,
}

impl SessionStore {
    /// Register a fresh session after a successful login.
    pub fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(id, Session::default());
        id
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.lock().unwrap().contains_key(id)
    }

    /// Drop the previous result set; called when a new submission begins.
    pub fn clear_results(&self, id: &Uuid) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(id) {
            session.articles = None;
        }
    }

    pub fn store_results(&self, id: &Uuid, articles: Vec<Article>) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(id) {
            session.articles = Some(articles);
        }
    }

    /// The result set saved by the most recent successful submission, if any.
    pub fn results(&self, id: &Uuid) -> Option<Vec<Article>> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(id).and_then(|s| s.articles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStore;
    use crate::domain::Article;

    #[test]
    fn unknown_session_has_no_results() {
        let store = SessionStore::default();
        let id = uuid::Uuid::new_v4();
        assert!(!store.contains(&id));
        assert!(store.results(&id).is_none());
    }

    #[test]
    fn results_are_scoped_to_their_session() {
        let store = SessionStore::default();
        let first = store.open();
        let second = store.open();

        store.store_results(
            &first,
            vec![Article {
                title: Some("t".to_string()),
                ..Article::default()
            }],
        );

        assert_eq!(store.results(&first).unwrap().len(), 1);
        assert!(store.results(&second).is_none());
    }

    #[test]
    fn new_submission_clears_the_previous_set() {
        let store = SessionStore::default();
        let id = store.open();

        store.store_results(&id, vec![Article::default()]);
        store.clear_results(&id);
        assert!(store.results(&id).is_none());
    }
}
