use crate::error::{GraphError, Result};
use crate::profile::UserProfile;
use std::collections::HashMap;
use tracing::debug;

/// Undirected friendship topology as an adjacency list.
///
/// Node ids are dense indices into the user table, so neighbor lists stay
/// small and cheap to walk.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// Adjacency list: NodeID -> Vec<NeighborID>, in connection order
    adj: Vec<Vec<u32>>,
    /// Undirected edges in insertion order, each stored once
    edges: Vec<(u32, u32)>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_node(&mut self) -> u32 {
        let id = self.adj.len() as u32;
        self.adj.push(Vec::new());
        id
    }

    pub fn neighbors(&self, node_id: u32) -> &[u32] {
        self.adj
            .get(node_id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Adds `a -- b` in both directions. Returns `false` if the edge exists.
    pub fn add_edge(&mut self, a: u32, b: u32) -> bool {
        if a as usize >= self.adj.len() || b as usize >= self.adj.len() {
            return false;
        }
        if self.has_edge(a, b) {
            return false;
        }
        self.adj[a as usize].push(b);
        self.adj[b as usize].push(a);
        self.edges.push((a, b));
        true
    }

    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }
}

/// The social graph store: user profiles plus the friendship relation.
///
/// Built once, then queried read-only. Users are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    users: Vec<UserProfile>,
    name_to_id: HashMap<String, u32>,
    topology: Topology,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user under its name. Names are unique.
    pub fn add_user(&mut self, profile: UserProfile) -> Result<()> {
        if self.name_to_id.contains_key(&profile.name) {
            return Err(GraphError::DuplicateUser(profile.name));
        }
        let id = self.topology.add_node();
        debug!(user = %profile.name, id, "registered user");
        self.name_to_id.insert(profile.name.clone(), id);
        self.users.push(profile);
        Ok(())
    }

    /// Connects two registered users. Returns `true` if a new edge was created,
    /// `false` if they were already friends.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<bool> {
        let a_id = self.require_id(a)?;
        let b_id = self.require_id(b)?;
        if a_id == b_id {
            return Err(GraphError::SelfConnection(a.to_string()));
        }
        let added = self.topology.add_edge(a_id, b_id);
        if !added {
            debug!(a, b, "connection already present");
        }
        Ok(added)
    }

    /// Friends of `name` in connection order. Empty for unknown or isolated users.
    pub fn neighbors(&self, name: &str) -> Vec<&UserProfile> {
        match self.id_of(name) {
            Some(id) => self.neighbor_profiles(id).collect(),
            None => Vec::new(),
        }
    }

    pub fn user(&self, name: &str) -> Option<&UserProfile> {
        self.id_of(name).map(|id| self.profile(id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// All users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &UserProfile> + '_ {
        self.users.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.users.iter().map(|u| u.name.as_str())
    }

    /// Every undirected connection once, in the order it was added.
    pub fn connections(&self) -> impl Iterator<Item = (&UserProfile, &UserProfile)> + '_ {
        self.topology
            .edges()
            .map(move |(a, b)| (self.profile(a), self.profile(b)))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn connection_count(&self) -> usize {
        self.topology.num_edges()
    }

    pub fn degree(&self, name: &str) -> usize {
        self.id_of(name)
            .map(|id| self.topology.neighbors(id).len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(crate) fn id_of(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    pub(crate) fn require_id(&self, name: &str) -> Result<u32> {
        self.id_of(name)
            .ok_or_else(|| GraphError::UnknownUser(name.to_string()))
    }

    pub(crate) fn profile(&self, id: u32) -> &UserProfile {
        &self.users[id as usize]
    }

    pub(crate) fn topology(&self) -> &Topology {
        &self.topology
    }

    fn neighbor_profiles(&self, id: u32) -> impl Iterator<Item = &UserProfile> + '_ {
        self.topology
            .neighbors(id)
            .iter()
            .map(move |&n| self.profile(n))
    }
}
