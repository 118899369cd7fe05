pub mod create_book_cmd;
pub mod delete_book_cmd;
pub mod get_book_cmd;
pub mod update_book_cmd;
