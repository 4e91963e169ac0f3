//! A read/peek cursor with a single step of undo

/// A read/peek cursor over a materialized sequence.
///
/// Only one step of undo is guaranteed: `read(); rollback(); read()` yields the same element
/// twice, anything deeper is unsupported.
///
/// # Examples
/// ```
/// # use lisa_ast_parsing::cursor::Cursor;
/// let mut cursor = Cursor::from("ab");
/// assert_eq!(cursor.peek(), Some(&'a'));
/// assert_eq!(cursor.read(), Some('a'));
/// cursor.rollback();
/// assert_eq!(cursor.read(), Some('a'));
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.read(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Cursor<T> {
    /// Creates a new cursor positioned at the first element
    pub fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }

    /// Gets the element at the current position without advancing
    pub fn peek(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// Moves back by one element, staying put at the start of the sequence
    pub fn rollback(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// The index of the element the next `read` returns
    pub fn position(&self) -> usize {
        self.position
    }

    /// Checks whether every element has been read
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }
}

impl<T: Clone> Cursor<T> {
    /// Gets the element at the current position and advances past it.
    ///
    /// At the end of the sequence this returns `None` and the position is unchanged.
    pub fn read(&mut self) -> Option<T> {
        let item = self.peek().cloned()?;
        self.position += 1;
        Some(item)
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<&str> for Cursor<char> {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}
