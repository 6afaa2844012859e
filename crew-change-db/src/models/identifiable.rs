/// Trait for entities that can be uniquely identified by a sequential id
pub trait Identifiable {
    /// Returns the unique identifier of the entity (0 for entities not yet created)
    fn get_id(&self) -> i64;
}
