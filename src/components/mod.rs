pub mod chat;
pub mod force_graph;
pub mod guidelines;
pub mod preview;
pub mod upload;
