#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything we can decode must re-encode and decode back to identical
    // canonical pixels (both encoders are lossless for RGB24).
    let Ok(decoded) = rasterbits::decode(data, enough::Unstoppable) else {
        return;
    };

    let bmp = rasterbits::encode_bmp(
        decoded.pixels(),
        decoded.width,
        decoded.height,
        enough::Unstoppable,
    )
    .expect("re-encode of decoded image");
    let redecoded = rasterbits::decode_bmp(&bmp, enough::Unstoppable).expect("decode of re-encode");
    assert_eq!(decoded.pixels(), redecoded.pixels());
});
