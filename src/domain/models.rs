use serde::{Deserialize, Serialize};

/// Postal address attached to a user record.
///
/// Only the city takes part in filtering; whatever else the endpoint sends
/// is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

/// One listed user as returned by the users endpoint.
///
/// Decoding is deliberately lenient: every field defaults when absent so an
/// unexpected payload shape surfaces as missing data in the UI rather than
/// as a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<Address>,
}

impl UserRecord {
    /// City of the user's address, if there is one.
    pub fn city(&self) -> Option<&str> {
        self.address
            .as_ref()
            .map(|a| a.city.as_str())
            .filter(|c| !c.is_empty())
    }

    /// City as shown in the listing; absent cities render as "N/A".
    pub fn city_display(&self) -> &str {
        self.city().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447",
            "address": {"street": "Douglas Extension", "city": "McKenziehaven"}
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Clementine Bauch");
        assert_eq!(user.city(), Some("McKenziehaven"));
        assert_eq!(user.city_display(), "McKenziehaven");
    }

    #[test]
    fn test_decode_missing_fields_defaults() {
        let user: UserRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.name.is_empty());
        assert!(user.email.is_empty());
        assert!(user.phone.is_empty());
        assert!(user.address.is_none());
        assert_eq!(user.city_display(), "N/A");
    }

    #[test]
    fn test_decode_address_without_city() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id": 1, "address": {"street": "Kulas Light"}}"#).unwrap();
        assert!(user.address.is_some());
        assert_eq!(user.city(), None);
        assert_eq!(user.city_display(), "N/A");
    }
}
