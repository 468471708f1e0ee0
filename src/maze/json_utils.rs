use crate::maze::follower::Traversal;

/// Rapport JSON d'un parcours, sur une seule ligne.
pub fn traversal_to_json(traversal: &Traversal) -> Result<String, serde_json::Error> {
    serde_json::to_string(traversal)
}
