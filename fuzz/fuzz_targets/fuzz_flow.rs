#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;

use roicalc_core::flow::{AuditFlow, FlowStage};

// Each byte is one host action against a single flow.
fuzz_target!(|data: &[u8]| {
    let mut flow = AuditFlow::new();
    let mut now = Duration::ZERO;
    for &byte in data {
        match byte % 6 {
            0 => {
                let _ = flow.start(now);
            }
            1 => flow.reset(),
            2 => flow.push_char(char::from(b'a' + byte % 26)),
            3 => flow.pop_char(),
            4 => flow.push_char('.'),
            _ => {
                now += Duration::from_millis(u64::from(byte) * 20);
                flow.advance(now);
            }
        }
        assert!(flow.progress() <= 100);
        assert!(flow.step() < flow.steps().len());
        assert_eq!(flow.report().is_some(), flow.stage() == FlowStage::Results);
    }
});
