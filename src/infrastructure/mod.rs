pub mod graphql;
pub mod in_memory;
pub mod terminal;
