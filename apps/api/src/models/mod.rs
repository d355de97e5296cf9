pub mod attachment;
pub mod history;
