mod message;
pub use message::{MessageRecord, RecordId, ScoredMessage};

mod store;
pub use store::{DbMessageStore, MemoryMessageStore, MessageStore};

mod ingest;
pub use ingest::ingest;

mod ranking;
pub use ranking::{NO_REFERENCE_SIMILARITY, rank};
