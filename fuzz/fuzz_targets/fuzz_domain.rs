#![no_main]

use libfuzzer_sys::fuzz_target;

use roicalc_core::domain::extract_domain;

fn is_bare(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.to_ascii_lowercase().starts_with("www.")
        && !domain
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | ':' | '@'))
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Never panics; a bare host extracts to itself
    let domain = extract_domain(input);
    if is_bare(&domain) {
        assert_eq!(extract_domain(&domain), domain);
    }
});
