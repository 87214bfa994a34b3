pub mod chat_completion;
pub mod client;
pub mod prescription_transcriber;
pub mod unconfigured;
