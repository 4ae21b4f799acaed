/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the GraphQL client, the console, the formatters and the output sinks.
pub mod outbound;
