use geoddl_core::{GeneratorRegistry, SpatialIndexGenerator};

mod yaml_runner;

pub use yaml_runner::{
    TestCase, TestResult, TestkitError, TestkitResult, load_test_cases_from_path,
    load_test_cases_from_str, matches_dialect, run_test,
};

pub fn registry_with(generator: impl SpatialIndexGenerator + 'static) -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(Box::new(generator));
    registry
}
