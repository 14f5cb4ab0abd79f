//! Insparty backend: accounts, founder and finder roles, ideas and the technology taxonomy.

pub mod server;
