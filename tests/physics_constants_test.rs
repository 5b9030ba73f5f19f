use tutor::tools::format_value;
use tutor::tools::physics_constants::{all_constants, lookup, PHYSICS_CONSTANTS};
use tutor::tools::{PhysicsConstantsTool, Tool};

fn names(found: &[&tutor::tools::PhysicsConstant]) -> Vec<&'static str> {
    found.iter().map(|c| c.name).collect()
}

#[test]
fn test_lookup_matches_name_case_insensitively() {
    assert_eq!(names(&lookup("SPEED OF LIGHT")), vec!["Speed of light in vacuum"]);
    assert_eq!(names(&lookup("planck")), vec!["Planck constant"]);
}

#[test]
fn test_lookup_matches_description_and_symbol() {
    assert_eq!(names(&lookup("proton")), vec!["Elementary charge", "Proton mass"]);
    assert_eq!(names(&lookup("mₑ")), vec!["Electron mass"]);
    assert_eq!(names(&lookup("mass")), vec!["Electron mass", "Proton mass"]);
}

#[test]
fn test_lookup_includes_every_constant_containing_the_query() {
    for constant in all_constants() {
        let fragment = &constant.name[..constant.name.len() / 2];
        let found = lookup(fragment);
        assert!(
            found.iter().any(|c| c.name == constant.name),
            "{:?} should find {}",
            fragment,
            constant.name
        );
    }
}

#[test]
fn test_lookup_without_match_is_empty() {
    assert!(lookup("dark energy density").is_empty());
    assert!(lookup("What is the speed of light?").is_empty());
}

#[test]
fn test_lookup_is_idempotent() {
    assert_eq!(lookup("constant"), lookup("constant"));
}

#[test]
fn test_table_is_complete() {
    assert_eq!(all_constants().len(), 6);
    assert_eq!(PHYSICS_CONSTANTS[0].value, 299_792_458.0);
    assert_eq!(PHYSICS_CONSTANTS[1].symbol, "G");
}

#[test]
fn test_tool_merges_terms_in_table_order() {
    let tool = PhysicsConstantsTool::new();
    let found = tool.execute(&["proton", "speed of light", "proton"]);
    assert_eq!(
        names(&found),
        vec!["Speed of light in vacuum", "Elementary charge", "Proton mass"]
    );
    assert_eq!(tool.name(), "physics_constants");
}

#[test]
fn test_rendered_line() {
    assert_eq!(
        PHYSICS_CONSTANTS[0].to_string(),
        "Speed of light in vacuum (c): 299792458 m/s - The speed of electromagnetic radiation in a vacuum"
    );
    assert_eq!(format_value(6.6743e-11), "6.6743e-11");
    assert_eq!(format_value(1.5), "1.5");
}
