/// A value that can be derived from an entity and merged back into it.
///
/// Used for partial-edit payloads: `from_entity` captures every editable field,
/// `apply_to` writes whatever the payload carries over the entity.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;
    fn apply_to(self, entity: &mut T);
}
