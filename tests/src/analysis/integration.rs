#![cfg(test)]
use crate::util::{Fixture, firsts, lease, summarize};
use pools_common::config::Config;
use pools_common::error::PoolsError;
use pools_core::perform_analysis;

/*************************************************************
                     Counting leases
**************************************************************/

#[test]
fn single_range_with_one_active_lease() {
    let fixture = Fixture::new("range 10.0.0.2 10.0.0.4;\n", &lease("10.0.0.3", "active"));
    let ctx = perform_analysis(&fixture.config()).unwrap();

    assert_eq!(
        summarize(&ctx),
        vec![("10.0.0.2".into(), "10.0.0.4".into(), 1, 0, 0)]
    );
    assert_eq!(ctx.span_size(&ctx.ranges()[0]), 3);
}

#[test]
fn shared_networks_split_their_leases() {
    let config = "\
        shared-network north {\n\
          subnet 10.1.0.0 netmask 255.255.255.0 {\n\
            range 10.1.0.10 10.1.0.19;\n\
          }\n\
        }\n\
        shared-network south {\n\
          subnet 10.2.0.0 netmask 255.255.255.0 {\n\
            range 10.2.0.10 10.2.0.29;\n\
          }\n\
        }\n";
    let leases = [
        lease("10.1.0.10", "active"),
        lease("10.1.0.11", "active"),
        lease("10.1.0.12", "abandoned"),
        lease("10.2.0.10", "active"),
        lease("10.2.0.11", "released"),
        lease("10.2.0.12", "expired"),
    ]
    .concat();
    let fixture = Fixture::new(config, &leases);
    let ctx = perform_analysis(&fixture.config()).unwrap();

    let named: Vec<_> = ctx.shared_networks().named().collect();
    assert_eq!(named.len(), 2);
    assert_eq!(
        (named[0].name.as_str(), named[0].available, named[0].used, named[0].touched),
        ("north", 10, 2, 1)
    );
    assert_eq!(
        (named[1].name.as_str(), named[1].available, named[1].used, named[1].touched),
        ("south", 20, 1, 2)
    );

    let total = ctx.all_networks();
    assert_eq!(total.used, named[0].used + named[1].used);
    assert_eq!(total.touched, 3);
    assert_eq!(total.available, 30);
}

#[test]
fn later_lease_entry_wins() {
    let leases = [lease("10.0.0.3", "free"), lease("10.0.0.3", "active")].concat();
    let fixture = Fixture::new("range 10.0.0.2 10.0.0.4;\n", &leases);
    let ctx = perform_analysis(&fixture.config()).unwrap();

    assert_eq!(ctx.leases().len(), 1);
    assert_eq!(
        summarize(&ctx),
        vec![("10.0.0.2".into(), "10.0.0.4".into(), 1, 0, 0)]
    );
}

#[test]
fn backups_are_tracked_separately() {
    let leases = [lease("10.0.0.2", "backup"), lease("10.0.0.3", "active")].concat();
    let fixture = Fixture::new("range 10.0.0.1 10.0.0.4;\n", &leases);
    let ctx = perform_analysis(&fixture.config()).unwrap();

    assert!(ctx.backups_seen());
    assert_eq!(
        summarize(&ctx),
        vec![("10.0.0.1".into(), "10.0.0.4".into(), 1, 0, 1)]
    );
    assert_eq!(ctx.all_networks().backups, 1);
}

#[test]
fn overlapping_ranges_count_every_lease() {
    let config = "range 10.0.0.1 10.0.0.20;\nrange 10.0.0.10 10.0.0.30;\n";
    let leases = [
        lease("10.0.0.5", "active"),
        lease("10.0.0.15", "active"),
        lease("10.0.0.25", "active"),
    ]
    .concat();
    let fixture = Fixture::new(config, &leases);
    let ctx = perform_analysis(&fixture.config()).unwrap();

    let counts: Vec<u64> = ctx.ranges().iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![2, 2]);
}

#[test]
fn empty_lease_file_conserves_sizes() {
    let fixture = Fixture::new("range 10.0.0.1 10.0.0.254;\n", "");
    let ctx = perform_analysis(&fixture.config()).unwrap();

    let (_, _, count, touched, backups) = summarize(&ctx).remove(0);
    assert_eq!((count, touched, backups), (0, 0, 0));
    assert_eq!(ctx.shared_networks().default_network().available, 254);
    assert_eq!(ctx.all_networks().available, 254);
}

/*************************************************************
                        Ordering
**************************************************************/

fn ordering_fixture() -> Fixture {
    // 2 of 4, 5 of 10 and 1 of 2 are all 50%; 1 of 10 is 10%.
    let config = "\
        range 10.0.3.1 10.0.3.10;\n\
        range 10.0.1.1 10.0.1.4;\n\
        range 10.0.4.1 10.0.4.10;\n\
        range 10.0.2.1 10.0.2.2;\n";
    let mut leases = String::new();
    for addr in ["10.0.1.1", "10.0.1.2", "10.0.2.1", "10.0.4.1"] {
        leases.push_str(&lease(addr, "active"));
    }
    for d in 1..=5 {
        leases.push_str(&lease(&format!("10.0.3.{d}"), "active"));
    }
    Fixture::new(config, &leases)
}

#[test]
fn default_order_is_by_address() {
    let fixture = ordering_fixture();
    let ctx = perform_analysis(&fixture.config()).unwrap();
    assert_eq!(firsts(&ctx), vec!["10.0.1.1", "10.0.2.1", "10.0.3.1", "10.0.4.1"]);
}

#[test]
fn percent_then_max() {
    let fixture = ordering_fixture();
    let cfg = Config {
        sort: "pm".into(),
        ..fixture.config()
    };
    let ctx = perform_analysis(&cfg).unwrap();
    assert_eq!(firsts(&ctx), vec!["10.0.4.1", "10.0.2.1", "10.0.1.1", "10.0.3.1"]);
}

#[test]
fn reverse_mirrors_address_order() {
    let fixture = ordering_fixture();
    let ascending = perform_analysis(&Config {
        sort: "i".into(),
        ..fixture.config()
    })
    .unwrap();
    let descending = perform_analysis(&Config {
        sort: "i".into(),
        reverse: true,
        ..fixture.config()
    })
    .unwrap();

    let mut mirrored = firsts(&descending);
    mirrored.reverse();
    assert_eq!(mirrored, firsts(&ascending));
}

#[test]
fn extra_sort_keys_are_ignored() {
    let fixture = ordering_fixture();
    let cfg = Config {
        sort: "ccccci".into(),
        ..fixture.config()
    };
    let ctx = perform_analysis(&cfg).unwrap();
    assert_eq!(firsts(&ctx), vec!["10.0.2.1", "10.0.4.1", "10.0.1.1", "10.0.3.1"]);
}

/*************************************************************
                         Failures
**************************************************************/

#[test]
fn unknown_sort_key_is_fatal() {
    let fixture = ordering_fixture();
    let cfg = Config {
        sort: "x".into(),
        ..fixture.config()
    };
    assert!(matches!(perform_analysis(&cfg), Err(PoolsError::UnknownSortKey('x'))));
}

#[test]
fn missing_config_is_fatal() {
    let fixture = ordering_fixture();
    let cfg = Config {
        config_file: fixture.path().join("nope.conf"),
        ..fixture.config()
    };
    let err = perform_analysis(&cfg).unwrap_err();
    assert!(matches!(err, PoolsError::Io { .. }));
    assert!(err.to_string().contains("nope.conf"));
}

#[test]
fn too_many_shared_networks_is_fatal() {
    let config: String = (0..1100)
        .map(|i| format!("shared-network n{i} {{ }}\n"))
        .collect();
    let fixture = Fixture::new(&config, "");
    assert!(matches!(
        perform_analysis(&fixture.config()),
        Err(PoolsError::TooManySharedNetworks(_))
    ));
}
