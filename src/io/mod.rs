pub mod todo_io;
