// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file store and the backend client.
// - Wire them into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
