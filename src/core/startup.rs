use chrono::NaiveDate;
use tracing::info;

use crate::models::user::User;
use crate::stores::InMemoryStore;

/// The demo directory loaded at boot
pub fn demo_users() -> Vec<User> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        User::new(1, "Peter", "Loew", "ploew@example.com", true, date(1990, 1, 1)),
        User::new(2, "Benjamin Franklin", "Gates", "bfgates@example.com", true, date(1991, 7, 22)),
        User::new(3, "Castor", "Troy", "ctroy@example.com", false, date(1992, 6, 12)),
        User::new(4, "Memphis", "Raines", "mraines@example.com", true, date(1993, 11, 27)),
        User::new(5, "Stanley", "Goodspeed", "sgodspeed@example.com", true, date(1994, 8, 1)),
        User::new(6, "H.I.", "McDunnough", "himcdunnough@example.com", true, date(1995, 12, 25)),
        User::new(7, "Cameron", "Poe", "cpoe@example.com", false, date(1970, 9, 18)),
        User::new(8, "Edward", "Malus", "emalus@example.com", false, date(1990, 6, 23)),
        User::new(9, "Damon", "Macready", "dmacready@example.com", false, date(1990, 8, 1)),
        User::new(10, "Johnny", "Blaze", "jblaze@example.com", true, date(1990, 10, 1)),
        User::new(11, "Robin", "Feld", "rfeld@example.com", true, date(1997, 11, 1)),
    ]
}

// this runs at boot time
pub fn seed_demo_users(store: &InMemoryStore<User>) -> usize {
    let users = demo_users();
    let count = users.len();

    for user in users {
        store.insert_seeded(user);
    }

    info!(users_seeded = count, users_stored = store.len(), "Demo users seeded");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::EntityStore;

    #[test]
    fn test_seed_loads_eleven_users() {
        let store = InMemoryStore::new();
        assert_eq!(seed_demo_users(&store), 11);
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_seed_has_four_inactive_users() {
        let inactive: Vec<i64> = demo_users()
            .iter()
            .filter(|u| !u.is_active)
            .map(|u| u.id)
            .collect();
        assert_eq!(inactive, vec![3, 7, 8, 9]);
    }

    #[test]
    fn test_create_after_seed_continues_numbering() {
        let store = InMemoryStore::new();
        seed_demo_users(&store);

        let created = store.create(User::default());
        assert_eq!(created.id, 12);
    }
}
