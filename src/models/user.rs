use chrono::NaiveDate;

use crate::stores::entity_store::Entity;

crate::shape! {
    /// Persisted user record
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct User {
        /// Assigned by the store on insert, 0 until then
        pub id: i64,
        pub forename: String,
        pub surname: String,
        pub email: String,
        /// Whether the user account is active
        pub is_active: bool,
        pub date_of_birth: NaiveDate,
    }
}

impl User {
    pub fn new(
        id: i64,
        forename: &str,
        surname: &str,
        email: &str,
        is_active: bool,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id,
            forename: forename.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            is_active,
            date_of_birth,
        }
    }
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
