//! The fourteen-person demonstration network.

use crate::profile::UserProfile;
use crate::store::SocialGraph;

const SAMPLE_USERS: &[(&str, u32, &[&str])] = &[
    ("gotya", 25, &["Technology", "Art"]),
    ("pintu", 30, &["Technology", "Music"]),
    ("bandya", 28, &["Art", "Cooking"]),
    ("athrya", 35, &["Music", "Sports"]),
    ("Eve", 22, &["Art", "Fashion"]),
    ("Atharva", 69, &["Geo-politics", "Music"]),
    ("Ananya", 26, &["Literature", "Dance"]),
    ("Arjun", 33, &["History", "Adventure"]),
    ("Divya", 29, &["Photography", "Travel"]),
    ("Ishaan", 27, &["Food", "Nature"]),
    ("rhea", 31, &["Movies", "Pets"]),
    ("fatima", 28, &["Yoga", "Health", "Blasting"]),
    ("Nikhil", 34, &["Science", "Technology"]),
    ("ashnuta", 20, &["Fashion", "Shopping"]),
];

const SAMPLE_CONNECTIONS: &[(&str, &str)] = &[
    ("gotya", "pintu"),
    ("gotya", "bandya"),
    ("pintu", "athrya"),
    ("bandya", "Eve"),
    ("bandya", "Atharva"),
    ("Atharva", "Ananya"),
    ("Atharva", "Arjun"),
    ("Ananya", "Divya"),
    ("Ananya", "Ishaan"),
    ("Arjun", "rhea"),
    ("Arjun", "fatima"),
    ("rhea", "Nikhil"),
    ("rhea", "ashnuta"),
];

/// Builds a fresh copy of the sample network. The result is a tree: every
/// user is reachable from every other.
pub fn sample_network() -> SocialGraph {
    let mut graph = SocialGraph::new();
    for &(name, age, interests) in SAMPLE_USERS {
        graph
            .add_user(UserProfile::new(name, age, interests.iter().copied()))
            .expect("sample user names are unique");
    }
    for &(a, b) in SAMPLE_CONNECTIONS {
        graph
            .add_connection(a, b)
            .expect("sample connections reference sample users");
    }
    graph
}
