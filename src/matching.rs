//! Catalog queries by capability set, component thresholds and similarity.

use crate::profile::{Capabilities, Components, Profile};
use crate::registry::Registry;
use std::sync::Arc;

/// Profiles whose capabilities include every flag set in `required`.
/// An all-false request matches the whole catalog.
pub fn match_capabilities(registry: &Registry, required: &Capabilities) -> Vec<Arc<Profile>> {
    registry.filter(|p| p.capabilities.is_superset_of(required))
}

/// Profiles whose component counts are each at least those in `minimum`.
/// An all-zero request matches the whole catalog.
pub fn match_components(registry: &Registry, minimum: &Components) -> Vec<Arc<Profile>> {
    registry.filter(|p| p.components.meets_minimum(minimum))
}

/// Other profiles sharing the generation, series and form factor of `model`.
///
/// `None` when `model` is not registered; `Some(vec![])` when it is but has
/// no siblings. The queried profile is never part of its own result.
pub fn find_similar(registry: &Registry, model: &str) -> Option<Vec<Arc<Profile>>> {
    let target = registry.get(model)?;
    Some(registry.filter(|p| {
        p.model != target.model
            && p.generation == target.generation
            && p.series == target.series
            && p.form_factor == target.form_factor
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FormFactor, Generation, Series};

    fn models(mut profiles: Vec<Arc<Profile>>) -> Vec<String> {
        profiles.sort_by(|a, b| a.model.cmp(&b.model));
        profiles.iter().map(|p| p.model.clone()).collect()
    }

    fn registry_with_switches() -> Registry {
        let registry = Registry::new();
        let mut c = Profile::new("C", "Two switches");
        c.components.switches = 2;
        c.capabilities.power_metering = true;
        let mut d = Profile::new("D", "Four switches");
        d.components.switches = 4;
        d.capabilities.power_metering = true;
        d.capabilities.cover_support = true;
        registry.register_all([c, d]);
        registry
    }

    #[test]
    fn test_match_capabilities_superset() {
        let registry = registry_with_switches();
        let pm = Capabilities {
            power_metering: true,
            ..Default::default()
        };
        let pm_cover = Capabilities {
            power_metering: true,
            cover_support: true,
            ..Default::default()
        };
        assert_eq!(models(match_capabilities(&registry, &pm)), ["C", "D"]);
        assert_eq!(models(match_capabilities(&registry, &pm_cover)), ["D"]);
    }

    #[test]
    fn test_empty_requests_match_everything() {
        let registry = registry_with_switches();
        assert_eq!(match_capabilities(&registry, &Capabilities::default()).len(), 2);
        assert_eq!(match_components(&registry, &Components::default()).len(), 2);
    }

    #[test]
    fn test_match_components_threshold() {
        let registry = registry_with_switches();
        let at_least = |n| Components {
            switches: n,
            ..Default::default()
        };
        assert_eq!(models(match_components(&registry, &at_least(2))), ["C", "D"]);
        assert_eq!(models(match_components(&registry, &at_least(4))), ["D"]);
        assert!(match_components(&registry, &at_least(10)).is_empty());
    }

    #[test]
    fn test_match_components_combines_fields() {
        let registry = registry_with_switches();
        let want = Components {
            switches: 2,
            inputs: 1,
            ..Default::default()
        };
        assert!(match_components(&registry, &want).is_empty());
    }

    #[test]
    fn test_find_similar_requires_all_three_fields() {
        let registry = Registry::new();
        for (model, series) in [
            ("P-1", Series::Plus),
            ("P-2", Series::Plus),
            ("R-1", Series::Pro),
            ("M-1", Series::Mini),
        ] {
            let mut p = Profile::new(model, model);
            p.generation = Generation::Gen2;
            p.form_factor = FormFactor::Flush;
            p.series = series;
            registry.register(p);
        }

        assert_eq!(models(find_similar(&registry, "P-1").unwrap()), ["P-2"]);
        assert_eq!(models(find_similar(&registry, "P-2").unwrap()), ["P-1"]);
        assert!(find_similar(&registry, "R-1").unwrap().is_empty());
        assert!(find_similar(&registry, "M-1").unwrap().is_empty());
    }

    #[test]
    fn test_find_similar_unknown_model() {
        let registry = registry_with_switches();
        assert!(find_similar(&registry, "MISSING").is_none());
    }
}
