/// Network adapters for external API calls
mod graphql_client;

pub use graphql_client::DagsterGraphQlClient;
