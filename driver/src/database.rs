pub use self::sqlite::*;

mod sqlite;
