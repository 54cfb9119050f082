pub mod book_repo;
