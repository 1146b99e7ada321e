#![no_main]
use libfuzzer_sys::fuzz_target;
use sprintf_core::{ErrorKind, Value, sprintf};

// Arbitrary templates against a fixed argument mix must never panic, and a
// failure must carry one of the documented kinds.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let template = String::from_utf8_lossy(data);
    let args = [
        Some(Value::Int(i64::from(data[0]) - 128)),
        Some(Value::Float(f64::from(data[0]) / 3.0)),
        None,
        Some(Value::Bytes(data.iter().take(8).copied().collect())),
        Some(Value::from("fuzz")),
        Some(Value::Boolean(data[0] & 1 == 1)),
    ];

    match sprintf(&template, &args) {
        Ok(out) => {
            // Literal text is never dropped.
            if !template.contains('%') {
                assert_eq!(out, template);
            }
        }
        Err(err) => assert!(ErrorKind::ALL.contains(&err.kind())),
    }
});
