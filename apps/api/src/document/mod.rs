// Resume document: schema defaults, validation, migration of stored shapes,
// and identity-based ordering. Everything here except handlers is pure.

pub mod defaults;
pub mod handlers;
pub mod migration;
pub mod ordering;
pub mod validation;
