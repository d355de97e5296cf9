// Course chat: turns a course's attachments and stored conversation into
// model context, calls the model, and writes the exchange back.

pub mod assembler;
pub mod guard;
pub mod handlers;
pub mod locks;
pub mod service;
pub mod store;

#[cfg(test)]
pub mod testing;
