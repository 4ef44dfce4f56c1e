use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    entities::{Ledger, LineItem, Person},
    errors::{DuplicatePersonName, PersonNotFound},
};

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.people.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Sum of every person's total, recomputed on each call.
    pub fn grand_total(&self) -> Decimal {
        self.people.values().map(Person::total).sum()
    }

    pub(crate) fn insert_new(&mut self, person: Person) -> Result<(), ServerError> {
        if self.people.contains_key(&person.name) {
            return Err(DuplicatePersonName::new(&person.name));
        }
        self.people.insert(person.name.clone(), person);
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Person, ServerError> {
        self.people
            .get_mut(name)
            .ok_or_else(|| PersonNotFound::new(name))
    }

    /// Replaces the whole expense list. Totals are derived, so nothing else
    /// needs updating.
    pub(crate) fn replace_items(
        &mut self,
        name: &str,
        items: Vec<LineItem>,
    ) -> Result<&Person, ServerError> {
        let person = self.get_mut(name)?;
        person.items = items;
        Ok(&*person)
    }

    pub(crate) fn set_paid(&mut self, name: &str, paid: Decimal) -> Result<(), ServerError> {
        self.get_mut(name)?.paid = paid;
        Ok(())
    }

    /// Re-keys a person, keeping its position in the map.
    pub(crate) fn rename(&mut self, old: &str, new: &str) -> Result<(), ServerError> {
        if old == new {
            return if self.contains(old) {
                Ok(())
            } else {
                Err(PersonNotFound::new(old))
            };
        }
        if self.people.contains_key(new) {
            return Err(DuplicatePersonName::new(new));
        }
        let (index, _, mut person) = self
            .people
            .shift_remove_full(old)
            .ok_or_else(|| PersonNotFound::new(old))?;
        person.name = new.to_string();
        self.people.shift_insert(index, new.to_string(), person);
        Ok(())
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Person> {
        self.people.shift_remove(name)
    }
}
