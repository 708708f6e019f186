use crate::types::UserId;

/// A keyset pagination window: up to `size` users whose id is
/// strictly greater than `after`, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  size: u32,
  after: Option<UserId>,
}

impl PageRequest {
  pub const DEFAULT_SIZE: u32 = 10;
  pub const MAX_SIZE: u32 = 100;

  /// Non-positive sizes fall back to [`Self::DEFAULT_SIZE`], larger
  /// ones are capped at [`Self::MAX_SIZE`].
  #[must_use]
  pub fn new(size: i32, after: Option<UserId>) -> Self {
    let size = match u32::try_from(size) {
      Ok(0) | Err(..) => Self::DEFAULT_SIZE,
      Ok(n) => n.min(Self::MAX_SIZE),
    };
    Self { size, after }
  }

  #[must_use]
  pub const fn size(&self) -> u32 {
    self.size
  }

  #[must_use]
  pub const fn after(&self) -> Option<UserId> {
    self.after
  }

  /// Builds the page out of fetched rows. A short page means the end
  /// of the data was reached, so no token is handed out.
  pub fn finish<T>(&self, items: Vec<T>, id_of: impl Fn(&T) -> UserId) -> Page<T> {
    let full = u32::try_from(items.len()).map_or(true, |n| n >= self.size);
    let next_token = if full { items.last().map(id_of) } else { None };
    Page { items, next_token }
  }
}

impl Default for PageRequest {
  fn default() -> Self {
    Self::new(0, None)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub next_token: Option<UserId>,
}

impl<T> Page<T> {
  #[must_use]
  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
    Page {
      items: self.items.into_iter().map(f).collect(),
      next_token: self.next_token,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_size_defaulting() {
    assert_eq!(PageRequest::new(0, None).size(), 10);
    assert_eq!(PageRequest::new(-7, None).size(), 10);
    assert_eq!(PageRequest::new(1, None).size(), 1);
    assert_eq!(PageRequest::new(100, None).size(), 100);
    assert_eq!(PageRequest::new(i32::MAX, None).size(), 100);
  }

  #[test]
  fn test_finish() {
    let ids = |range: std::ops::RangeInclusive<i64>| -> Vec<UserId> {
      range.map(UserId::new).collect()
    };
    let request = PageRequest::new(3, None);

    let page = request.finish(ids(1..=3), |id| *id);
    assert_eq!(page.next_token, Some(UserId::new(3)));

    let page = request.finish(ids(4..=5), |id| *id);
    assert_eq!(page.next_token, None);

    let page = request.finish(Vec::new(), |id: &UserId| *id);
    assert_eq!(page.next_token, None);
  }

  #[test]
  fn test_map_keeps_token() {
    let page = Page {
      items: vec![1, 2],
      next_token: Some(UserId::new(2)),
    };
    let page = page.map(|n| n * 10);
    assert_eq!(page.items, vec![10, 20]);
    assert_eq!(page.next_token, Some(UserId::new(2)));
  }
}
