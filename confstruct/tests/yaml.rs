//! YAML parsing, emission and file round trips.

use anyhow::{Result, ensure};
use confstruct::{Struct, StructError, YamlOptions};
use rstest::rstest;
use test_helpers::fs::TempYaml;

mod common;
use common::{caelus, caelus_yaml};

/// Reference flow rendering; engines may wrap it at different columns.
const CAELUS_FLOW: &str = concat!(
    "{caelus: {caelus_cml: {default: latest, versions: [{version: v7.04, path: ~/Caelus/caelus-7.04/},\n",
    "        {version: v6.10, path: ~/Caelus/caelus-6.10/}, {version: v6.04, path: ~/Caelus/caelus-6.04/}]}}}\n",
);

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const CAELUS_BLOCK: &str = concat!(
    "caelus:\n",
    "  caelus_cml:\n",
    "    default: latest\n",
    "    versions:\n",
    "    - version: v7.04\n",
    "      path: ~/Caelus/caelus-7.04/\n",
    "    - version: v6.10\n",
    "      path: ~/Caelus/caelus-6.10/\n",
    "    - version: v6.04\n",
    "      path: ~/Caelus/caelus-6.04/\n",
);

#[rstest]
fn parse_exposes_nested_containers(caelus: Struct) -> Result<()> {
    let cml = caelus.get_attr("caelus")?.get_attr("caelus_cml")?;
    ensure!(cml.get_attr("default")? == "latest");
    let first = cml.get_attr("versions")?.get_index(0)?;
    ensure!(first.get_attr("version")? == "v7.04");
    Ok(())
}

#[rstest]
fn flow_output_matches_reference_tokens(caelus: Struct) -> Result<()> {
    let out = caelus.to_yaml(&YamlOptions::default().with_default_flow_style(true))?;
    ensure!(
        collapse_whitespace(&out) == collapse_whitespace(CAELUS_FLOW),
        "unexpected flow output: {out}"
    );
    ensure!(out.ends_with('\n'));
    Ok(())
}

#[rstest]
fn block_output_keeps_insertion_order(caelus: Struct) -> Result<()> {
    ensure!(caelus.to_yaml(&YamlOptions::default())? == CAELUS_BLOCK);
    Ok(())
}

#[rstest]
#[case(YamlOptions::default())]
#[case(YamlOptions::default().with_default_flow_style(true))]
fn emitted_yaml_parses_back_unchanged(caelus: Struct, #[case] options: YamlOptions) -> Result<()> {
    let reparsed = Struct::from_yaml(&caelus.to_yaml(&options)?)?;
    ensure!(reparsed == caelus, "round trip changed the document");
    Ok(())
}

#[rstest]
fn awkward_scalars_survive_a_block_round_trip() -> Result<()> {
    let mut config = Struct::new();
    for (key, value) in [
        ("empty", ""),
        ("boolish", "yes"),
        ("numeric", "1.0"),
        ("nullish", "~"),
        ("colon", "a: b"),
        ("comment", "x #y"),
        ("indicator", "*anchor"),
        ("quote", "it's"),
        ("multiline", "line one\nline two"),
        ("padded", " both "),
    ] {
        config.set_item(key, value);
    }
    config.set_item("flow", vec!["a,b", "[c]"]);
    let reparsed = Struct::from_yaml(&config.to_yaml(&YamlOptions::default())?)?;
    ensure!(reparsed == config, "round trip changed scalars");
    Ok(())
}

#[rstest]
fn load_yaml_reads_files() -> Result<()> {
    let file = TempYaml::write("test.yaml", &caelus_yaml())?;
    let obj = Struct::load_yaml(file.path())?;
    ensure!(obj.contains_key("caelus"));
    Ok(())
}

#[rstest]
fn load_yaml_reports_missing_files() -> Result<()> {
    let file = TempYaml::write("present.yaml", "")?;
    let missing = file.sibling("absent.yaml");
    let err = Struct::load_yaml(&missing).expect_err("missing file must fail");
    ensure!(
        matches!(&err, StructError::Io { path, .. } if path.as_path() == missing.as_std_path()),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn load_yaml_surfaces_parse_errors() -> Result<()> {
    let file = TempYaml::write("broken.yaml", "recipient: [")?;
    let err = Struct::load_yaml(file.path()).expect_err("malformed YAML must fail");
    ensure!(matches!(err, StructError::Yaml(_)), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn dump_then_load_round_trips(caelus: Struct) -> Result<()> {
    let file = TempYaml::write("seed.yaml", "")?;
    let out = file.sibling("out.yaml");
    caelus.dump_yaml(&out, &YamlOptions::default())?;
    ensure!(std::fs::read_to_string(&out)? == CAELUS_BLOCK);
    ensure!(Struct::load_yaml(&out)? == caelus);
    Ok(())
}
