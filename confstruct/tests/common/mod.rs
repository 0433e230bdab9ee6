//! Shared fixtures for integration tests.

use confstruct::Struct;
use rstest::fixture;
use test_helpers::text::dedent;

/// Tool version catalogue used across the YAML and path tests.
pub fn caelus_yaml() -> String {
    dedent(
        "
        caelus:

          caelus_cml:
            default: latest

            versions:
              - version: v7.04
                path: ~/Caelus/caelus-7.04/

              - version: v6.10
                path: ~/Caelus/caelus-6.10/

              - version: v6.04
                path: ~/Caelus/caelus-6.04/
        ",
    )
}

/// The catalogue parsed into a container.
#[fixture]
pub fn caelus() -> Struct {
    Struct::from_yaml(&caelus_yaml()).expect("catalogue parses")
}
