use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::shape! {
    /// User as seen at the service boundary, decoupled from storage
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserModel {
        pub id: i64,
        pub forename: String,
        pub surname: String,
        pub email: String,
        pub is_active: bool,
        pub date_of_birth: NaiveDate,
    }
}
