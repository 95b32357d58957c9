/// A detached, editable copy of an entity.
///
/// The copy is taken with [`Editable::from_entity`], mutated freely by the
/// caller, and written back with [`Editable::apply_to`]. Dropping the copy
/// without applying it leaves the entity untouched.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;

    fn apply_to(self, entity: &mut T);
}
