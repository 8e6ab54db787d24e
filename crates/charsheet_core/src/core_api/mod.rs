mod error;
mod storage;
mod store;

pub use error::{CoreError, CoreErrorCode};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Edit, STORE_KEY, Store, load_record};
