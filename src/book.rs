//! The record type replayed against every container.

use core::{cmp::Ordering, fmt};

use crate::errors::BookParseError;

// BOOK
// ================================================================================================

/// Basic information about a book that could be sold by a retailer.
///
/// Books order by ISBN, then author, then title, then price. Equality is structural over all four
/// fields, with prices compared by their total order so that `Eq` and `Ord` agree. A price of
/// `-0.0` is stored as `0.0`, so the two zeros name the same book.
#[derive(Debug, Clone, Default)]
pub struct Book {
    /// The 10 or 13 character international standard book number, e.g. "9790619213090".
    isbn: String,
    title: String,
    author: String,
    /// The cost of the book in US dollars.
    price: f64,
}

impl Book {
    /// Returns a new [Book] instantiated from the provided fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price: normalize_price(price),
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    // PUBLIC MUTATORS
    // --------------------------------------------------------------------------------------------

    pub fn set_isbn(&mut self, isbn: impl Into<String>) -> &mut Self {
        self.isbn = isbn.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = normalize_price(price);
        self
    }
}

/// Maps `-0.0` to `0.0` and leaves every other value alone.
fn normalize_price(price: f64) -> f64 {
    if price == 0.0 { 0.0 } else { price }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Book {}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.isbn
            .cmp(&other.isbn)
            .then_with(|| self.author.cmp(&other.author))
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.price.total_cmp(&other.price))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_book(self))
    }
}

// TEXT ENCODING
// ================================================================================================

/// Parses a single line of the form `"isbn","title","author",price`.
///
/// Fields are quoted; a backslash escapes the following character, so `\"` and `\\` stand for a
/// literal quote and backslash. Whitespace before each field and around the price is ignored.
pub fn parse_book(line: &str) -> Result<Book, BookParseError> {
    let mut fields = FieldReader { rest: line };

    let isbn = fields.quoted("isbn")?;
    fields.delimiter("isbn")?;
    let title = fields.quoted("title")?;
    fields.delimiter("title")?;
    let author = fields.quoted("author")?;
    fields.delimiter("author")?;
    let price = fields.price()?;

    Ok(Book { isbn, title, author, price })
}

/// Renders a book in the form accepted by [parse_book], without a trailing newline.
pub fn format_book(book: &Book) -> String {
    let mut out = String::with_capacity(book.isbn.len() + book.title.len() + book.author.len() + 16);
    push_quoted(&mut out, &book.isbn);
    out.push(',');
    push_quoted(&mut out, &book.title);
    out.push(',');
    push_quoted(&mut out, &book.author);
    out.push(',');
    out.push_str(&book.price.to_string());
    out
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

struct FieldReader<'a> {
    rest: &'a str,
}

impl FieldReader<'_> {
    fn quoted(&mut self, field: &'static str) -> Result<String, BookParseError> {
        let rest = self.rest.trim_start();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, '"')) => {},
            Some(_) => return Err(BookParseError::MissingOpeningQuote { field }),
            None => return Err(BookParseError::UnexpectedEndOfLine { field }),
        }

        let mut value = String::new();
        let mut escaped = false;
        for (pos, c) in chars {
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                self.rest = &rest[pos + 1..];
                return Ok(value);
            } else {
                value.push(c);
            }
        }

        Err(BookParseError::UnterminatedField { field })
    }

    fn delimiter(&mut self, field: &'static str) -> Result<(), BookParseError> {
        match self.rest.trim_start().strip_prefix(',') {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            },
            None => Err(BookParseError::MissingDelimiter { field }),
        }
    }

    fn price(&mut self) -> Result<f64, BookParseError> {
        let text = self.rest.trim();
        if text.is_empty() {
            return Err(BookParseError::UnexpectedEndOfLine { field: "price" });
        }

        match text.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => {
                self.rest = "";
                Ok(normalize_price(price))
            },
            _ => Err(BookParseError::InvalidPrice(text.to_string())),
        }
    }
}

// TESTS
// ================================================================================================
