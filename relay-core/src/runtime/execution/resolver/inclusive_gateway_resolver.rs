use relay_common::prelude::*;
use relay_common::{Node, NodeClass};

use super::{NodeResolver, Resolution, ResolverContext};

pub struct InclusiveGatewayResolver;

impl NodeResolver for InclusiveGatewayResolver {
    fn node_class(&self) -> NodeClass {
        NodeClass::InclusiveGateway
    }

    fn resolve<'a>(
        &self,
        _context: &ResolverContext<'a>,
        target: &'a Node,
    ) -> RelayResult<Resolution<'a>> {
        fmt_err!(
            UnimplementedGateway,
            "inclusive gateway {} is not supported",
            target.id
        )
    }
}
