use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use relay_common::prelude::*;
use relay_common::NodeClass;

use super::direct_resolver::DirectResolver;
use super::exclusive_gateway_resolver::ExclusiveGatewayResolver;
use super::inclusive_gateway_resolver::InclusiveGatewayResolver;
use super::parallel_gateway_resolver::ParallelGatewayResolver;
use super::NodeResolver;

static REGISTRY: Lazy<DashMap<NodeClass, Box<dyn NodeResolver>>> = Lazy::new(|| {
    let map = DashMap::new();
    let resolvers: Vec<Box<dyn NodeResolver>> = vec![
        Box::new(DirectResolver::new(NodeClass::Start)),
        Box::new(DirectResolver::new(NodeClass::UserTask)),
        Box::new(DirectResolver::new(NodeClass::ReceiveTask)),
        Box::new(DirectResolver::new(NodeClass::ScriptTask)),
        Box::new(DirectResolver::new(NodeClass::End)),
        Box::new(ExclusiveGatewayResolver),
        Box::new(ParallelGatewayResolver),
        Box::new(InclusiveGatewayResolver),
    ];
    for resolver in resolvers {
        map.insert(resolver.node_class(), resolver);
    }
    map
});

pub struct ResolverRegistry;

impl ResolverRegistry {
    pub fn get_resolver(
        node_class: NodeClass,
    ) -> RelayResult<Ref<'static, NodeClass, Box<dyn NodeResolver>>> {
        REGISTRY.get(&node_class).ok_or_else(|| {
            ErrorCode::UnImplement(format!("no resolver for {}", node_class.as_ref()))
        })
    }
}
