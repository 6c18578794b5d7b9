use shared_types::{
    AppError, Appointment, ContactMessage, Dentist, Feedback, Patient, PatientLog, Receptionist,
    Schedule,
};

/// Records that carry a stable identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! keyed_by {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.$field
            }
        })*
    };
}

keyed_by! {
    Schedule => id,
    Patient => id,
    PatientLog => id,
    Dentist => id,
    Receptionist => id,
    Appointment => reference_id,
    Feedback => id,
    ContactMessage => id,
}

/// Cached list of one kind of record plus its load state.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
    loaded: bool,
    error: Option<AppError>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
        }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a fetch has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// Mark a fetch as in flight. Existing items stay visible.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the whole list with a fresh fetch.
    pub fn finish_load(&mut self, result: Result<Vec<T>, AppError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load collection");
                self.error = Some(err);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a record, replacing any with the same key in place.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(index))
    }

    /// Apply `f` to the record with `key` and return the updated copy.
    pub fn update<F>(&mut self, key: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let item = self.items.iter_mut().find(|item| item.key() == key)?;
        f(item);
        Some(item.clone())
    }

    /// Drop everything, including the loaded flag and any error.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
