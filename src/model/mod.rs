//! Wire models shared by the gateway and the browser client.

pub mod api;
pub mod student;
