//! Merging a host parse with the parse of its inline template.

use splice_host::HostParse;
use splice_template::TemplateParse;

use crate::outcome::CompositeParse;

/// Builds a composite result.
///
/// The host tree and scope model are used as they are; the template's scope
/// model is dropped. Template visitor keys are merged over the host's, so a
/// node type known to both takes the template's child fields. Location
/// conversion and body visiting come from the template, the program and node
/// maps from the host.
#[must_use]
pub fn compose(host: HostParse, template: TemplateParse) -> CompositeParse {
    let host_parts = host.into_parts();
    let template_parts = template.into_parts();

    let mut visitor_keys = host_parts.visitor_keys;
    visitor_keys.merge(&template_parts.visitor_keys);

    CompositeParse {
        ast: host_parts.ast,
        template_ast: template_parts.ast,
        visitor_keys,
        scope_manager: host_parts.scope_manager,
        host_services: host_parts.services,
        template_services: template_parts.services,
    }
}
