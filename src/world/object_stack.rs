use crate::objects::Body;

/// Stable reference to a body registered in an [`ObjectStack`].
///
/// Handles are never reused: once a body is removed its handle simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered registry of every collidable body.
///
/// Iteration follows insertion order. When several bodies block the same
/// side of a moving body, this order decides which one is recorded as the
/// contact.
#[derive(Debug, Clone, Default)]
pub struct ObjectStack {
    slots: Vec<Option<Body>>,
}

impl ObjectStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body and returns its handle.
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.slots.len());
        self.slots.push(Some(body));
        handle
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|body| (BodyHandle(i), body)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|body| (BodyHandle(i), body)))
    }

    pub fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    /// Unregisters a body, handing it back to the caller.
    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        self.slots.get_mut(handle.0).and_then(Option::take)
    }

    /// Lifts a body out of its slot so it can be resolved against the rest.
    /// It must be put back with [`ObjectStack::restore`].
    pub(crate) fn take(&mut self, handle: BodyHandle) -> Option<Body> {
        self.remove(handle)
    }

    pub(crate) fn restore(&mut self, handle: BodyHandle, body: Body) {
        if let Some(slot) = self.slots.get_mut(handle.0) {
            *slot = Some(body);
        }
    }

    /// Mutable references to two distinct live bodies.
    pub(crate) fn pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut Body, &mut Body)> {
        if a == b || a.0 >= self.slots.len() || b.0 >= self.slots.len() {
            return None;
        }

        // Split so that both halves can be borrowed mutably
        let (first, second) = if a.0 < b.0 {
            let (low, high) = self.slots.split_at_mut(b.0);
            (&mut low[a.0], &mut high[0])
        } else {
            let (low, high) = self.slots.split_at_mut(a.0);
            (&mut high[0], &mut low[b.0])
        };
        Some((first.as_mut()?, second.as_mut()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Material;
    use crate::math::Vec2;

    fn body_at(x: f64) -> Body {
        Body::new(Vec2::new(x, 0.0), Vec2::new(1.0, 1.0), 1.0, Material::BASIC).unwrap()
    }

    #[test]
    fn test_insert_and_iterate_in_order() {
        let mut stack = ObjectStack::new();
        let a = stack.insert(body_at(1.0));
        let b = stack.insert(body_at(2.0));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.handles(), vec![a, b]);
        let xs: Vec<f64> = stack.iter().map(|(_, body)| body.position().x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn test_removed_handles_are_not_reused() {
        let mut stack = ObjectStack::new();
        let a = stack.insert(body_at(1.0));
        let removed = stack.remove(a).unwrap();
        assert_eq!(removed.position().x, 1.0);
        assert!(!stack.contains(a));
        assert!(stack.is_empty());

        let b = stack.insert(body_at(2.0));
        assert_ne!(a, b);
        assert!(stack.get(a).is_none());
    }

    #[test]
    fn test_take_and_restore() {
        let mut stack = ObjectStack::new();
        let a = stack.insert(body_at(1.0));
        let b = stack.insert(body_at(2.0));
        let body = stack.take(a).unwrap();
        assert_eq!(stack.handles(), vec![b]);
        stack.restore(a, body);
        assert_eq!(stack.handles(), vec![a, b]);
    }

    #[test]
    fn test_pair_mut() {
        let mut stack = ObjectStack::new();
        let a = stack.insert(body_at(1.0));
        let b = stack.insert(body_at(2.0));

        let (first, second) = stack.pair_mut(b, a).unwrap();
        assert_eq!(first.position().x, 2.0);
        assert_eq!(second.position().x, 1.0);
        first.velocity.x = 5.0;
        assert_eq!(stack.get(b).unwrap().velocity.x, 5.0);

        assert!(stack.pair_mut(a, a).is_none());
        stack.remove(b);
        assert!(stack.pair_mut(a, b).is_none());
    }
}
