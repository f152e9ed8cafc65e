//! Merge & resolve
//!
//! Produces the final configuration a task handler consumes. Resolution is
//! deterministic and side-effect-free: identical inputs always resolve
//! identically, and merging a resolved configuration with empty overlays
//! changes nothing.

use super::model::Layered;

/// Resolves a task's configuration from its two overlays.
///
/// Precedence, lowest to highest: built-in defaults, file overlay, CLI
/// overlay. Applied per field, not per task: the file may set one field
/// while the CLI overrides another.
pub fn resolve<C: Layered>(file: &C::Overlay, cli: &C::Overlay) -> C {
    C::default().merge(file).merge(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{
        AnalyzeConfig, AnalyzeOverlay, ExamplesConfig, ExamplesOverlay, TestConfig, TestOverlay,
    };
    use proptest::prelude::*;

    #[test]
    fn defaults_apply_when_both_overlays_empty() {
        let resolved: AnalyzeConfig =
            resolve(&AnalyzeOverlay::default(), &AnalyzeOverlay::default());
        assert_eq!(resolved, AnalyzeConfig::default());

        let resolved: TestConfig = resolve(&TestOverlay::default(), &TestOverlay::default());
        assert_eq!(resolved, TestConfig::default());
    }

    #[test]
    fn file_and_cli_overlays_combine_per_field() {
        let file = AnalyzeOverlay {
            entry_points: Some(vec!["bin/".to_string()]),
            fatal_warnings: None,
            hints: None,
        };
        let cli = AnalyzeOverlay {
            entry_points: None,
            fatal_warnings: None,
            hints: Some(false),
        };

        let resolved: AnalyzeConfig = resolve(&file, &cli);
        assert_eq!(resolved.entry_points, vec!["bin/"]);
        assert!(resolved.fatal_warnings);
        assert!(!resolved.hints);
    }

    fn path_list() -> impl Strategy<Value = Option<Vec<String>>> {
        proptest::option::of(proptest::collection::vec("[a-z]{1,6}(/[a-z]{1,6})?/?", 0..4))
    }

    fn analyze_overlay() -> impl Strategy<Value = AnalyzeOverlay> {
        (
            path_list(),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(entry_points, fatal_warnings, hints)| AnalyzeOverlay {
                entry_points,
                fatal_warnings,
                hints,
            })
    }

    fn examples_overlay() -> impl Strategy<Value = ExamplesOverlay> {
        (
            proptest::option::of("[a-z]{1,12}"),
            proptest::option::of(1u16..),
        )
            .prop_map(|(hostname, port)| ExamplesOverlay { hostname, port })
    }

    proptest! {
        #[test]
        fn cli_wins_over_file_per_field(file in analyze_overlay(), cli in analyze_overlay()) {
            let resolved: AnalyzeConfig = resolve(&file, &cli);
            let defaults = AnalyzeConfig::default();

            let expected_hints = cli.hints.or(file.hints).unwrap_or(defaults.hints);
            prop_assert_eq!(resolved.hints, expected_hints);

            let expected_fatal = cli
                .fatal_warnings
                .or(file.fatal_warnings)
                .unwrap_or(defaults.fatal_warnings);
            prop_assert_eq!(resolved.fatal_warnings, expected_fatal);

            let expected_entries = cli
                .entry_points
                .clone()
                .or_else(|| file.entry_points.clone())
                .unwrap_or(defaults.entry_points);
            prop_assert_eq!(resolved.entry_points, expected_entries);
        }

        #[test]
        fn resolution_is_idempotent(file in analyze_overlay(), cli in analyze_overlay()) {
            let resolved: AnalyzeConfig = resolve(&file, &cli);
            let again = resolved.merge(&AnalyzeOverlay::default());
            prop_assert_eq!(again, resolved);
        }

        #[test]
        fn resolution_is_deterministic(file in examples_overlay(), cli in examples_overlay()) {
            let first: ExamplesConfig = resolve(&file, &cli);
            let second: ExamplesConfig = resolve(&file, &cli);
            prop_assert_eq!(first, second);
        }
    }
}
