use crate::report::format::Resource;
use serde_yaml::Value;

/// Extract infrastructure resources from a parsed document.
///
/// Three independent rules are applied over the top-level mapping, in fixed
/// order: `resources`, `services`, `infrastructure`. All three may contribute
/// and duplicates across sections are accepted. Any other document shape
/// yields no resources, without error.
pub fn extract(document: &Value) -> Vec<Resource> {
    let mut resources = Vec::new();

    if let Some(section) = document.get("resources") {
        resources.extend(parse_resources(section));
    }
    if let Some(section) = document.get("services") {
        resources.extend(parse_services(section));
    }
    if let Some(section) = document.get("infrastructure") {
        resources.extend(parse_infrastructure(section));
    }

    resources
}

/// Parse the `resources` section: a mapping keyed by resource name, or a
/// sequence of mappings each carrying its own `name` and `type`.
fn parse_resources(section: &Value) -> Vec<Resource> {
    let mut resources = Vec::new();

    match section {
        Value::Mapping(map) => {
            for (name, config) in map {
                let kind = config
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                resources.push(Resource {
                    name: name.as_str().unwrap_or("unnamed").to_string(),
                    kind: kind.to_string(),
                    config: config.clone(),
                });
            }
        }
        Value::Sequence(items) => {
            for item in items {
                if !item.is_mapping() {
                    continue;
                }
                resources.push(Resource {
                    name: item
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("unnamed")
                        .to_string(),
                    kind: item
                        .get("type")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown")
                        .to_string(),
                    config: item.clone(),
                });
            }
        }
        _ => {}
    }

    resources
}

/// Parse the `services` section: a mapping keyed by service name. Every
/// entry gets the fixed type `service`.
fn parse_services(section: &Value) -> Vec<Resource> {
    named_entries(section, "service")
}

/// Parse the `infrastructure` section: a mapping keyed by component name.
/// Every entry gets the fixed type `infrastructure`.
fn parse_infrastructure(section: &Value) -> Vec<Resource> {
    named_entries(section, "infrastructure")
}

fn named_entries(section: &Value, kind: &str) -> Vec<Resource> {
    let map = match section.as_mapping() {
        Some(map) => map,
        None => return Vec::new(),
    };

    map.iter()
        .map(|(name, config)| Resource {
            name: name.as_str().unwrap_or("unnamed").to_string(),
            kind: kind.to_string(),
            config: config.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn extracts_resources_mapping_in_key_order() {
        let doc = parse(
            r#"
resources:
  a:
    type: x
  b:
    type: y
"#,
        );
        let resources = extract(&doc);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "a");
        assert_eq!(resources[0].kind, "x");
        assert_eq!(resources[1].name, "b");
        assert_eq!(resources[1].kind, "y");
    }

    #[test]
    fn resource_without_type_is_unknown() {
        let doc = parse("resources:\n  bare: {}\n  scalar: 42\n");
        let resources = extract(&doc);
        assert_eq!(resources[0].kind, "unknown");
        assert_eq!(resources[1].kind, "unknown");
    }

    #[test]
    fn extracts_resources_sequence_with_defaults() {
        let doc = parse(
            r#"
resources:
  - name: web
    type: compute
  - type: database
  - name: anonymous
  - just-a-string
"#,
        );
        let resources = extract(&doc);
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[0].name, "web");
        assert_eq!(resources[0].kind, "compute");
        assert_eq!(resources[1].name, "unnamed");
        assert_eq!(resources[1].kind, "database");
        assert_eq!(resources[2].name, "anonymous");
        assert_eq!(resources[2].kind, "unknown");
    }

    #[test]
    fn services_and_infrastructure_get_fixed_types() {
        let doc = parse(
            r#"
services:
  web:
    port: 80
infrastructure:
  vpc:
    cidr: 10.0.0.0/16
"#,
        );
        let resources = extract(&doc);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "web");
        assert_eq!(resources[0].kind, "service");
        assert_eq!(resources[1].name, "vpc");
        assert_eq!(resources[1].kind, "infrastructure");
    }

    #[test]
    fn all_three_sections_contribute_in_order() {
        let doc = parse(
            r#"
infrastructure:
  vpc: {}
services:
  api: {}
resources:
  db:
    type: postgresql
"#,
        );
        let resources = extract(&doc);
        let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
        // Extraction order is fixed regardless of document order
        assert_eq!(names, vec!["db", "api", "vpc"]);
    }

    #[test]
    fn duplicates_across_sections_are_accepted() {
        let doc = parse(
            r#"
resources:
  db:
    type: postgresql
services:
  db: {}
"#,
        );
        assert_eq!(extract(&doc).len(), 2);
    }

    #[test]
    fn unrecognized_shapes_yield_nothing() {
        assert!(extract(&parse("just a string")).is_empty());
        assert!(extract(&parse("- a\n- b")).is_empty());
        assert!(extract(&parse("other_key:\n  a: 1")).is_empty());
        assert!(extract(&parse("services: not-a-mapping")).is_empty());
    }
}
