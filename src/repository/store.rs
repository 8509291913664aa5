use std::collections::BTreeMap;

use crate::domain::blog::BlogPost;
use crate::domain::category::Category;
use crate::domain::class::Class;
use crate::domain::location::Location;
use crate::domain::message::Message;
use crate::domain::portfolio::PortfolioItem;
use crate::domain::service::Service;
use crate::domain::team::TeamMember;
use crate::domain::testimonial::Testimonial;
use crate::domain::user::User;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Rows of one entity type keyed by id.
///
/// Ids come from a counter that starts at 1 and only moves forward, so ids are
/// never reused and iterating the map yields rows in insertion order.
#[derive(Debug)]
pub(crate) struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Builds a row for the next id and stores it. The counter only advances
    /// when `build` succeeds.
    pub(crate) fn insert_with<F>(&mut self, build: F) -> RepositoryResult<T>
    where
        F: FnOnce(i32) -> RepositoryResult<T>,
    {
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::ValidationError("id space exhausted".to_string()))?;
        let row = build(id)?;
        self.rows.insert(id, row.clone());
        self.next_id = next_id;
        Ok(row)
    }

    pub(crate) fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub(crate) fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub(crate) fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows.values().find(|row| predicate(row))
    }

    pub(crate) fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }
}

/// All tables held by [`super::MemoryRepository`].
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) users: Table<User>,
    pub(crate) categories: Table<Category>,
    pub(crate) locations: Table<Location>,
    pub(crate) classes: Table<Class>,
    pub(crate) services: Table<Service>,
    pub(crate) portfolio_items: Table<PortfolioItem>,
    pub(crate) team_members: Table<TeamMember>,
    pub(crate) testimonials: Table<Testimonial>,
    pub(crate) messages: Table<Message>,
    pub(crate) blog_posts: Table<BlogPost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_are_never_reused() {
        let mut table: Table<String> = Table::default();
        let first = table.insert_with(|id| Ok(format!("row-{id}"))).unwrap();
        let second = table.insert_with(|id| Ok(format!("row-{id}"))).unwrap();
        assert_eq!(first, "row-1");
        assert_eq!(second, "row-2");

        assert!(table.remove(2));
        let third = table.insert_with(|id| Ok(format!("row-{id}"))).unwrap();
        assert_eq!(third, "row-3");
    }

    #[test]
    fn failed_build_does_not_consume_an_id() {
        let mut table: Table<String> = Table::default();
        let err = table
            .insert_with(|_| Err(RepositoryError::Conflict("x".into())))
            .unwrap_err();
        assert_eq!(err, RepositoryError::Conflict("x".into()));

        let row = table.insert_with(|id| Ok(format!("row-{id}"))).unwrap();
        assert_eq!(row, "row-1");
    }

    #[test]
    fn values_follow_insertion_order() {
        let mut table: Table<String> = Table::default();
        for name in ["c", "a", "b"] {
            table.insert_with(|_| Ok(name.to_string())).unwrap();
        }
        let values: Vec<_> = table.values().cloned().collect();
        assert_eq!(values, vec!["c", "a", "b"]);
    }
}
