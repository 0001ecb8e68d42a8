#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate netdns;

fuzz_target!(|data: &[u8]| {
    // Any input must decode or fail cleanly, and anything decoded must print.
    if let Ok(response) = netdns::Response::from_slice(data) {
        let _ = response.to_string();
    }
});
