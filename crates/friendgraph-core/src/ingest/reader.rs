use crate::error::{GraphError, Result};
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Users and connections as read from a network description, before
/// validation against a [`crate::SocialGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

pub trait NetworkReader {
    fn read(&self, content: &str) -> Result<NetworkDocument>;
}

/// Reads `{"users": [...], "connections": [["a", "b"], ...]}`.
pub struct JsonReader;

impl NetworkReader for JsonReader {
    fn read(&self, content: &str) -> Result<NetworkDocument> {
        Ok(serde_json::from_str(content)?)
    }
}

/// One row per user: `name,age,interests,friends`, where `interests` and
/// `friends` are lists split on `list_separator`.
pub struct CsvReader {
    pub delimiter: u8,
    pub list_separator: char,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            list_separator: ';',
        }
    }

    fn split_list(&self, raw: &str) -> Vec<String> {
        raw.split(self.list_separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    age: String,
    #[serde(default)]
    interests: String,
    #[serde(default)]
    friends: String,
}

impl NetworkReader for CsvReader {
    fn read(&self, content: &str) -> Result<NetworkDocument> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut doc = NetworkDocument::default();

        for result in rdr.deserialize() {
            let row: CsvRow = result?;
            if row.name.is_empty() {
                continue;
            }
            let age = row.age.parse::<u32>().map_err(|_| {
                GraphError::Parse(format!("invalid age '{}' for user '{}'", row.age, row.name))
            })?;

            for friend in self.split_list(&row.friends) {
                doc.connections.push((row.name.clone(), friend));
            }
            doc.users
                .push(UserProfile::new(row.name, age, self.split_list(&row.interests)));
        }

        Ok(doc)
    }
}
