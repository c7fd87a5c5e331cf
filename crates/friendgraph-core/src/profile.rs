use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A person in the social graph.
///
/// Interests are a set: order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub interests: BTreeSet<String>,
}

impl UserProfile {
    pub fn new<I, S>(name: impl Into<String>, age: u32, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            age,
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of interests both profiles have.
    pub fn shared_interests(&self, other: &UserProfile) -> usize {
        self.interests.intersection(&other.interests).count()
    }

    pub fn interests_joined(&self, sep: &str) -> String {
        self.interests
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (age {}, interests: {})",
            self.name,
            self.age,
            self.interests_joined(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_interests() {
        let gotya = UserProfile::new("gotya", 25, ["Technology", "Art"]);
        let pintu = UserProfile::new("pintu", 30, ["Technology", "Music"]);
        let athrya = UserProfile::new("athrya", 35, ["Music", "Sports"]);

        assert_eq!(gotya.shared_interests(&pintu), 1);
        assert_eq!(pintu.shared_interests(&gotya), 1);
        assert_eq!(gotya.shared_interests(&athrya), 0);
        assert_eq!(gotya.shared_interests(&gotya), 2);
    }

    #[test]
    fn test_duplicate_interests_collapse() {
        let user = UserProfile::new("eve", 22, ["Art", "Art", "Fashion"]);
        assert_eq!(user.interests.len(), 2);
        assert_eq!(user.to_string(), "eve (age 22, interests: Art, Fashion)");
    }

    #[test]
    fn test_missing_interests_deserialize_empty() {
        let user: UserProfile = serde_json::from_str(r#"{"name":"solo","age":40}"#).unwrap();
        assert!(user.interests.is_empty());
    }
}
