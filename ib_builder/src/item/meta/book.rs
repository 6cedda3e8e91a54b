use crate::ItemError;
use strum_macros::{Display, EnumString};

pub const MAX_PAGES: usize = 100;
pub const MAX_PAGE_LENGTH: usize = 320;
pub const MAX_TITLE_LENGTH: usize = 32;

/// How many times a written book has been copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Generation {
  Original,
  CopyOfOriginal,
  CopyOfCopy,
  Tattered,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookMeta {
  title:      Option<String>,
  author:     Option<String>,
  generation: Option<Generation>,
  pages:      Vec<String>,
}

fn clamp_page(text: String) -> String {
  if text.chars().count() > MAX_PAGE_LENGTH {
    text.chars().take(MAX_PAGE_LENGTH).collect()
  } else {
    text
  }
}

impl BookMeta {
  pub fn title(&self) -> Option<&str> { self.title.as_deref() }
  pub fn author(&self) -> Option<&str> { self.author.as_deref() }
  pub fn generation(&self) -> Option<Generation> { self.generation }
  pub fn pages(&self) -> &[String] { &self.pages }

  /// Sets the title. Titles longer than [`MAX_TITLE_LENGTH`] characters are
  /// rejected.
  pub fn set_title(&mut self, title: Option<String>) -> Result<(), ItemError> {
    if let Some(t) = &title {
      let len = t.chars().count();
      if len > MAX_TITLE_LENGTH {
        return Err(ItemError::InvalidValue {
          name:   "book title",
          reason: format!("{len} characters is longer than {MAX_TITLE_LENGTH}"),
        });
      }
    }
    self.title = title;
    Ok(())
  }
  pub fn set_author(&mut self, author: Option<String>) { self.author = author; }
  pub fn set_generation(&mut self, generation: Option<Generation>) { self.generation = generation; }

  /// Appends a page. Pages past [`MAX_PAGES`] are dropped, and long pages are
  /// cut to [`MAX_PAGE_LENGTH`] characters. Returns false if the page was
  /// dropped.
  pub fn add_page(&mut self, text: String) -> bool {
    if self.pages.len() >= MAX_PAGES {
      return false;
    }
    self.pages.push(clamp_page(text));
    true
  }

  /// Replaces a page. Page numbers start at 1, like in game.
  pub fn set_page(&mut self, page: usize, text: String) -> Result<(), ItemError> {
    if page == 0 || page > self.pages.len() {
      return Err(ItemError::IndexOutOfRange { index: page, len: self.pages.len() });
    }
    self.pages[page - 1] = clamp_page(text);
    Ok(())
  }
}
