// Domain layer module exports
// Following Hexagonal Architecture: the members controller depends only on
// these types and on the ports, never on concrete adapters

pub mod billing_team;
pub mod ports;
