//! Order-preserving collection keyed by element id
//!
//! Lines in a song and blocks in a line both live in an `IdList`. Lookups
//! by an id that isn't present fail with `ModelError::NotFound`: callers are
//! expected to pass ids taken from the live collection, so a miss means the
//! UI and the model disagree.

use super::errors::ModelError;
use super::id::{Id, Identified};

#[derive(Debug, Clone, PartialEq)]
pub struct IdList<T> {
    items: Vec<T>,
}

impl<T> Default for IdList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> IdList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Element at a position, if any
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn index_of(&self, id: Id) -> Result<usize, ModelError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(ModelError::NotFound(id))
    }

    pub fn get(&self, id: Id) -> Result<&T, ModelError> {
        let index = self.index_of(id)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, id: Id) -> Result<&mut T, ModelError> {
        let index = self.index_of(id)?;
        Ok(&mut self.items[index])
    }

    /// Append one element at the end
    pub fn push(&mut self, item: T) -> Result<(), ModelError> {
        self.insert_at(self.items.len(), vec![item])
    }

    /// Insert elements immediately after `anchor`, keeping their order
    pub fn insert_after(
        &mut self,
        anchor: Id,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), ModelError> {
        let index = self.index_of(anchor)?;
        self.insert_at(index + 1, items.into_iter().collect())
    }

    pub fn insert_at_beginning(
        &mut self,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), ModelError> {
        self.insert_at(0, items.into_iter().collect())
    }

    fn insert_at(&mut self, index: usize, items: Vec<T>) -> Result<(), ModelError> {
        for (i, item) in items.iter().enumerate() {
            let id = item.id();
            if self.contains(id) || items[..i].iter().any(|earlier| earlier.id() == id) {
                return Err(ModelError::DuplicateId(id));
            }
        }
        self.items.splice(index..index, items);
        Ok(())
    }

    pub fn remove(&mut self, id: Id) -> Result<T, ModelError> {
        let index = self.index_of(id)?;
        Ok(self.items.remove(index))
    }

    /// Remove every element in `ids`
    ///
    /// All ids are checked first; if any is missing nothing is removed.
    /// Removed elements are returned in collection order.
    pub fn remove_many(&mut self, ids: &[Id]) -> Result<Vec<T>, ModelError> {
        for &id in ids {
            self.index_of(id)?;
        }
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| ids.contains(&item.id()));
        self.items = kept;
        Ok(removed)
    }

    /// Read the element, run it through `transform` and store the result
    /// in its place
    ///
    /// The transform must keep the element's id. If it doesn't, the list is
    /// left unchanged and `ModelError::IdChanged` is returned.
    pub fn replace(&mut self, id: Id, transform: impl FnOnce(&T) -> T) -> Result<(), ModelError> {
        let index = self.index_of(id)?;
        let updated = transform(&self.items[index]);
        check_same_id(id, &updated)?;
        self.items[index] = updated;
        Ok(())
    }

    /// Apply `transform` to every element, given its position
    ///
    /// Every element must keep its id; otherwise nothing is changed.
    pub fn update_all(
        &mut self,
        mut transform: impl FnMut(usize, &T) -> T,
    ) -> Result<(), ModelError> {
        let updated = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let next = transform(index, item);
                check_same_id(item.id(), &next)?;
                Ok(next)
            })
            .collect::<Result<Vec<_>, ModelError>>()?;
        self.items = updated;
        Ok(())
    }

    /// Move an element so it ends up at `index`
    ///
    /// Indexes past the end move the element to the end.
    pub fn move_to(&mut self, id: Id, index: usize) -> Result<(), ModelError> {
        let item = self.remove(id)?;
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        Ok(())
    }
}

fn check_same_id<T: Identified>(expected: Id, item: &T) -> Result<(), ModelError> {
    let found = item.id();
    if found == expected {
        Ok(())
    } else {
        Err(ModelError::IdChanged { expected, found })
    }
}

impl<T: Identified> FromIterator<T> for IdList<T> {
    /// Elements with an id already seen are dropped
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = IdList::new();
        for item in iter {
            if let Err(e) = list.push(item) {
                log::warn!("Skipping element while building list: {}", e);
            }
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a IdList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for IdList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
