#![cfg(test)]
use crate::util::{Fixture, lease6, summarize};
use pools_core::perform_analysis;

#[test]
fn ipv6_ranges_and_leases() {
    let config = "\
        subnet6 2001:db8:1::/64 {\n\
          range6 2001:db8:1::100 2001:db8:1::1ff;\n\
        }\n";
    let leases = [
        lease6("2001:db8:1::100", "active"),
        lease6("2001:db8:1::101", "expired"),
        lease6("2001:db8:2::1", "active"),
    ]
    .concat();
    let fixture = Fixture::new(config, &leases);
    let ctx = perform_analysis(&fixture.config()).unwrap();

    assert_eq!(ctx.family().unwrap().name(), "IPv6");
    assert_eq!(
        summarize(&ctx),
        vec![("2001:db8:1::100".into(), "2001:db8:1::1ff".into(), 1, 1, 0)]
    );
    assert_eq!(ctx.all_networks().available, 256);
}

#[test]
fn huge_ipv6_range_keeps_exact_size() {
    let fixture = Fixture::new("range6 2001:db8:: 2001:db8::ffff:ffff:ffff:ffff;\n", "");
    let ctx = perform_analysis(&fixture.config()).unwrap();
    assert_eq!(ctx.all_networks().available, 1u128 << 64);
}
