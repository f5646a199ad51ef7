use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::domain::user::{User, UserId};
use crate::domain::error::{DomainError, DomainResult};

type UsersById = BTreeMap<UserId, User>;

/// In-memory collection of users keyed by id.
///
/// Serialises as a JSON object keyed by the decimal id, in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    users: UsersById,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Insert `user` under its own id, replacing any previous record.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Overwrite only the name of a stored user.
    pub fn rename(&mut self, id: UserId, name: String) -> Option<&User> {
        let user = self.users.get_mut(&id)?;
        user.name = name;
        Some(user)
    }

    /// Missing ids are a no-op returning `None`.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        self.users.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// One past the largest id in use, starting at 1 for an empty store.
    ///
    /// Freed ids are not tracked: removing the current maximum makes that
    /// id available again.
    pub fn next_id(&self) -> DomainResult<UserId> {
        let max = self.users.keys().next_back().copied().unwrap_or(0);
        max.checked_add(1).ok_or(DomainError::IdSpaceExhausted(max))
    }
}

impl FromIterator<User> for Store {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let users = iter.into_iter().map(|user| (user.id, user)).collect();
        return Store { users };
    }
}


#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Store, User, UserId};

    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn store() -> Store {
        vec![User::new(1, "Ada"), User::new(2, "Grace"), User::new(5, "Edsger")]
            .into_iter()
            .collect()
    }

    #[test]
    fn empty_store_allocates_one() {
        let store = Store::new();
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[rstest]
    fn allocates_past_max(store: Store) {
        assert_eq!(store.next_id().unwrap(), 6);
    }

    #[rstest]
    fn reuses_id_of_removed_max(mut store: Store) {
        store.remove(5).unwrap();
        assert_eq!(store.next_id().unwrap(), 3);

        // removing something below the max leaves allocation alone
        store.remove(1).unwrap();
        assert_eq!(store.next_id().unwrap(), 3);
    }

    #[test]
    fn negative_max_allocates_past_it() {
        let store: Store = vec![User::new(-4, "Neg")].into_iter().collect();
        assert_eq!(store.next_id().unwrap(), -3);
    }

    #[test]
    fn exhausted_id_space() {
        let store: Store = vec![User::new(UserId::MAX, "Last")].into_iter().collect();
        assert_eq!(store.next_id(), Err(DomainError::IdSpaceExhausted(UserId::MAX)));
    }

    #[rstest]
    fn get_insert_remove(mut store: Store) {
        assert_eq!(store.get(2), Some(&User::new(2, "Grace")));
        assert_eq!(store.get(3), None);

        store.insert(User::new(3, "Barbara"));
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(3).unwrap().name, "Barbara");

        assert_eq!(store.remove(3), Some(User::new(3, "Barbara")));
        assert_eq!(store.remove(3), None);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn rename_keeps_id(mut store: Store) {
        let renamed = store.rename(1, "Countess".to_string()).unwrap();
        assert_eq!(renamed, &User::new(1, "Countess"));
        assert!(store.rename(42, "Nobody".to_string()).is_none());
    }

    #[rstest]
    fn iterates_in_id_order(store: Store) {
        let ids: Vec<_> = store.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[rstest]
    fn serialize_keyed_by_id(store: Store) {
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value, json!({
            "1": {"id": 1, "name": "Ada"},
            "2": {"id": 2, "name": "Grace"},
            "5": {"id": 5, "name": "Edsger"},
        }));
    }

    #[rstest]
    fn deserialize_keyed_by_id(store: Store) {
        let parsed: Store = serde_json::from_value(json!({
            "5": {"id": 5, "name": "Edsger"},
            "1": {"id": 1, "name": "Ada"},
            "2": {"id": 2, "name": "Grace"},
        })).unwrap();
        assert_eq!(parsed, store);
    }
}
