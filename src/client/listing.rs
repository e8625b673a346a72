//! Lazy iteration over the `data` array of a listing response.
//!
//! A [`Listing`] is produced from exactly one response. Entries are kept as
//! raw JSON and turned into typed resources one at a time as the iterator
//! advances. There is no pagination: if the API splits a result into pages,
//! only the first one is exposed.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::models::{ClientHandle, Resource};
use crate::Result;

/// A finite, single-pass sequence of resources.
///
/// Each item is a `Result` because entries are converted lazily: a malformed
/// entry (for instance a bad timestamp) surfaces when it is reached, and the
/// remaining entries can still be consumed.
///
/// # Example
///
/// ```no_run
/// # fn example(client: wrike_rs::WrikeClient) -> wrike_rs::Result<()> {
/// for task in client.tasks(None)? {
///     let task = task?;
///     println!("{}", task.title.as_deref().unwrap_or("(untitled)"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct Listing<T> {
    entries: std::vec::IntoIter<Value>,
    handle: ClientHandle,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Listing<T> {
    pub(crate) fn new(entries: Vec<Value>, handle: ClientHandle) -> Self {
        Self {
            entries: entries.into_iter(),
            handle,
            _marker: PhantomData,
        }
    }

    /// A listing with no entries.
    pub fn empty() -> Self {
        Self::new(Vec::new(), ClientHandle::default())
    }

    /// Number of entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Resource> Iterator for Listing<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some(T::from_data(entry, &self.handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T: Resource> ExactSizeIterator for Listing<T> {}

impl<T> fmt::Debug for Listing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field("remaining", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Task};
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_empty_listing() {
        let mut listing: Listing<Task> = Listing::empty();
        assert_eq!(listing.remaining(), 0);
        assert!(listing.next().is_none());
        assert!(listing.next().is_none());
    }

    #[test]
    fn test_entries_convert_in_order() {
        let listing: Listing<Contact> = Listing::new(
            vec![json!({"id": "KUAJ25LC"}), json!({"id": "KUAJ25LD"})],
            ClientHandle::default(),
        );
        assert_eq!(listing.len(), 2);

        let ids: Vec<String> = listing
            .map(|c| c.unwrap().id.unwrap())
            .collect();
        assert_eq!(ids, ["KUAJ25LC", "KUAJ25LD"]);
    }

    #[test]
    fn test_bad_entry_does_not_stop_iteration() {
        let mut listing: Listing<Task> = Listing::new(
            vec![
                json!({"id": "T1", "createdDate": "not a date"}),
                json!({"id": "T2"}),
            ],
            ClientHandle::default(),
        );

        assert!(matches!(listing.next(), Some(Err(Error::Json(_)))));
        assert_eq!(listing.next().unwrap().unwrap().id.as_deref(), Some("T2"));
        assert!(listing.next().is_none());
    }
}
