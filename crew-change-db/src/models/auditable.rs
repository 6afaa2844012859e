use super::identifiable::Identifiable;

/// Trait for entities for which change log entries are maintained
pub trait Auditable: Identifiable {
    /// Returns the ID of the last change log entry for this entity, if any
    fn get_last_change_log_id(&self) -> Option<i64>;
}
