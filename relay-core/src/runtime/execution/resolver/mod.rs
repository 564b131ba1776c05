mod direct_resolver;
mod exclusive_gateway_resolver;
mod inclusive_gateway_resolver;
mod node_resolver;
mod parallel_gateway_resolver;
mod resolver_context;
mod resolver_registry;

pub use node_resolver::{NodeResolver, Resolution, StateTransition};
pub use resolver_context::ResolverContext;
pub use resolver_registry::ResolverRegistry;
