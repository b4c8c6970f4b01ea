// View models exchanged with HTTP clients

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::shape! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserListItemViewModel {
        pub id: i64,
        pub forename: String,
        pub surname: String,
        pub email: String,
        pub is_active: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserListViewModel {
    pub items: Vec<UserListItemViewModel>,
}

crate::shape! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserDetailsViewModel {
        pub id: i64,
        pub forename: String,
        pub surname: String,
        pub email: String,
        pub is_active: bool,
        pub date_of_birth: NaiveDate,
    }
}

crate::shape! {
    /// Body of POST /users/create
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserCreateRequestModel {
        pub forename: String,
        pub surname: String,
        pub email: String,
        /// Unchecked checkboxes are not submitted
        #[serde(default)]
        pub is_active: bool,
        pub date_of_birth: NaiveDate,
    }
}

crate::shape! {
    /// Body of POST /users/edit/{id}
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserEditRequestModel {
        pub id: i64,
        pub forename: String,
        pub surname: String,
        pub email: String,
        #[serde(default)]
        pub is_active: bool,
        pub date_of_birth: NaiveDate,
    }
}

/// Query string of GET /users
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, alias = "isActive")]
    pub is_active: Option<bool>,
}
