pub mod create_book;
pub mod list_books;

pub use create_book::CreateBookDto;
pub use list_books::{BookListParams, BookListQuery};
