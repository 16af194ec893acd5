pub mod llm;
pub mod observability;
pub mod providers;
pub mod speech;
pub mod storage;
