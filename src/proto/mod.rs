//! Wire protocol types shared by the transport and its tests.

pub mod rpc;
