#![no_main]

use libfuzzer_sys::fuzz_target;

use roicalc_core::hash::hash;
use roicalc_core::report::derive_report;

fuzz_target!(|data: &[u8]| {
    let domain = String::from_utf8_lossy(data);
    let r = derive_report(&domain);

    assert!(hash(&domain) <= 1 << 31);
    assert!((180..1000).contains(&r.pages));
    assert!(r.missing_ai <= r.pages);
    assert!((14..62).contains(&r.gaps));
    assert!((7_000..50_000).contains(&r.traffic_at_risk));
    assert!((6..24).contains(&r.citation_rate));
    assert_eq!(r, derive_report(&domain));
});
