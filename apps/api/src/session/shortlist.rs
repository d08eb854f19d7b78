use serde::{Deserialize, Serialize};

/// The student's saved universities, in the order they were added.
/// Names are the identity; adding a name twice is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortlist {
    names: Vec<String>,
}

impl Shortlist {
    /// Adds a university name. Returns false if it was already present.
    pub fn add(&mut self, name: String) -> bool {
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Removes a name. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() < before
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut list = Shortlist::default();
        assert!(list.add("TU Berlin".to_string()));
        assert!(list.add("LMU Munich".to_string()));
        assert_eq!(list.names(), ["TU Berlin", "LMU Munich"]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut list = Shortlist::default();
        assert!(list.add("TU Berlin".to_string()));
        assert!(!list.add("TU Berlin".to_string()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut list = Shortlist::default();
        list.add("TU Berlin".to_string());
        assert!(list.remove("TU Berlin"));
        assert!(!list.remove("TU Berlin"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_keeps_other_entries_in_order() {
        let mut list = Shortlist::default();
        list.add("A".to_string());
        list.add("B".to_string());
        list.add("C".to_string());
        list.remove("B");
        assert_eq!(list.names(), ["A", "C"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut list = Shortlist::default();
        list.add("TU Berlin".to_string());
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[\"TU Berlin\"]");
    }
}
