use super::{Book, ItemBuilder};
use crate::{
  item::{
    meta::{BookMeta, Generation},
    MetaKind,
  },
  ItemError,
};

impl ItemBuilder<Book> {
  fn book_meta<R>(&mut self, f: impl FnOnce(&mut BookMeta) -> R) -> Option<R> {
    match self.meta.as_mut().map(|m| m.kind_mut()) {
      Some(MetaKind::Book(b)) => Some(f(b)),
      _ => None,
    }
  }

  pub fn author(mut self, author: &str) -> Self {
    let author = author.to_string();
    self.book_meta(|b| b.set_author(Some(author)));
    self
  }
  /// Sets the title. Formatting codes are translated. This fails if the title
  /// is too long.
  pub fn title(mut self, title: &str) -> Result<Self, ItemError> {
    let title = self.translate(title);
    self.book_meta(|b| b.set_title(Some(title))).transpose()?;
    Ok(self)
  }
  pub fn generation(mut self, generation: Generation) -> Self {
    self.book_meta(|b| b.set_generation(Some(generation)));
    self
  }

  /// Appends a page. Formatting codes are translated.
  pub fn page(self, text: &str) -> Self { self.pages([text]) }
  /// Appends all the given pages. Pages past the limit are dropped.
  pub fn pages<S: AsRef<str>>(mut self, pages: impl IntoIterator<Item = S>) -> Self {
    let pages: Vec<_> = pages.into_iter().map(|p| self.translate(p.as_ref())).collect();
    self.book_meta(|b| {
      for page in pages {
        if !b.add_page(page) {
          trace!("book is full, dropping page");
        }
      }
    });
    self
  }
  /// Replaces a page. Pages are numbered from 1.
  pub fn set_page(mut self, page: usize, text: &str) -> Result<Self, ItemError> {
    let text = self.translate(text);
    self.book_meta(|b| b.set_page(page, text)).transpose()?;
    Ok(self)
  }
}
