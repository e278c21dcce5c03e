#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode and explicit per-format decode must never panic.
    let _ = rasterbits::decode(data, enough::Unstoppable);
    let _ = rasterbits::decode_bmp(data, enough::Unstoppable);
    let _ = rasterbits::decode_graw(data, enough::Unstoppable);
});
