//! # Bundled Corpus
//!
//! Content compiled into the crate: aggregates reachable through the registry
//! and the chunks/operations they were derived from.

mod becoming;

pub use becoming::{becoming_content, becoming_ir};

use crate::DialecticError;
use crate::integrity::IntegrityReport;
use crate::registry::FactoryResolver;

/// Factories for every bundled aggregate, keyed like the generated registry.
#[must_use]
pub fn bundled_resolver() -> FactoryResolver {
    FactoryResolver::new().with(becoming::MODULE, becoming::EXPORT, becoming_ir)
}

/// Integrity report over all bundled chunks and operations.
pub fn integrity_report() -> Result<IntegrityReport, DialecticError> {
    Ok(becoming_content()?.integrity_report())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StateGraph;
    use crate::registry::IrRegistry;

    #[test]
    fn becoming_is_valid() {
        let ir = becoming_ir();
        ir.validate().expect("valid aggregate");
        assert_eq!(ir.states.len(), 7);
        assert_eq!(
            ir.metadata.as_ref().map(|m| m.total_states),
            Some(ir.states.len())
        );
    }

    #[test]
    fn becoming_graph_is_consistent_and_points_outward() {
        let report = StateGraph::from_ir(&becoming_ir()).check();
        assert!(report.is_consistent(), "{report:?}");
        let unresolved: Vec<_> = report
            .unresolved_links
            .iter()
            .map(|l| (l.from.as_str(), l.to.as_str()))
            .collect();
        assert_eq!(
            unresolved,
            vec![("becoming-7", "existence-1"), ("nothing-2", "becoming-1")]
        );
        assert!(report.unrealized_forces.is_empty());
    }

    #[test]
    fn becoming_content_is_clean() {
        let content = becoming_content().expect("content");
        assert_eq!(content.chunks.len(), 9);
        assert_eq!(content.operations.len(), 15);
        assert!(integrity_report().expect("report").is_clean());
        assert_eq!(content.operations_for_chunk(1).len(), 4);
    }

    #[test]
    fn registry_resolves_bundled_becoming() {
        let registry = IrRegistry::generated();
        let keys = registry.keys_by_id("becoming-ir");
        assert_eq!(keys.len(), 1);
        let ir = registry.load(&keys[0]).expect("load");
        assert_eq!(ir, becoming_ir());
    }
}
