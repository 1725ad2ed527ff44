#![cfg(test)]
use crate::util::{Fixture, lease};
use pools_common::error::PoolsError;
use pools_core::perform_analysis;

#[test]
fn included_ranges_join_the_enclosing_network() {
    let fixture = Fixture::new("", &lease("10.5.0.2", "active"));
    let inner = fixture.add_file("pools.conf", "range 10.5.0.1 10.5.0.8;\n");
    let config = format!(
        "# site config\nshared-network campus {{\n  include \"{}\";\n}}\n",
        inner.display()
    );
    let main = fixture.add_file("main.conf", &config);

    let cfg = pools_common::config::Config {
        config_file: main,
        ..fixture.config()
    };
    let ctx = perform_analysis(&cfg).unwrap();

    let campus = ctx.shared_networks().named().next().unwrap();
    assert_eq!(campus.name, "campus");
    assert_eq!((campus.available, campus.used), (8, 1));
}

#[test]
fn nested_includes_are_followed() {
    let fixture = Fixture::new("", "");
    let leaf = fixture.add_file("leaf.conf", "range 10.6.0.1 10.6.0.2;\n");
    let middle = fixture.add_file("middle.conf", &format!("include \"{}\";\n", leaf.display()));
    let main = fixture.add_file("main.conf", &format!("include \"{}\";\n", middle.display()));

    let cfg = pools_common::config::Config {
        config_file: main,
        ..fixture.config()
    };
    let ctx = perform_analysis(&cfg).unwrap();
    assert_eq!(ctx.ranges().len(), 1);
}

#[test]
fn include_cycle_is_fatal() {
    let fixture = Fixture::new("", "");
    let a = fixture.path().join("a.conf");
    let b = fixture.path().join("b.conf");
    fixture.add_file("a.conf", &format!("include \"{}\";\n", b.display()));
    fixture.add_file("b.conf", &format!("include \"{}\";\n", a.display()));

    let cfg = pools_common::config::Config {
        config_file: a,
        ..fixture.config()
    };
    assert!(matches!(
        perform_analysis(&cfg),
        Err(PoolsError::IncludeTooDeep { .. })
    ));
}
