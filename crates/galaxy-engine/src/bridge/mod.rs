pub mod protocol;

pub use protocol::ProtocolLayout;
