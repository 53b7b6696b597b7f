//! Decoders must never panic on arbitrary input bytes: every failure mode is
//! `TooShort` with the tail at the failure point. The record decode drives
//! the skip-value scanner through whatever nesting the fuzzer invents.
#![no_main]

use jsonshape::{
    decode_field, decode_record, from_slice, BuildRecord, CodecOptions, Decode, DecodeError,
    Decoded, FieldStep,
};
use libfuzzer_sys::fuzz_target;

struct Probe {
    #[allow(dead_code)]
    count: Option<u64>,
}

#[derive(Default)]
struct ProbeBuilder {
    count: Option<u64>,
}

impl BuildRecord for ProbeBuilder {
    type Value = Probe;

    fn field<'a>(&mut self, name: &str, input: &'a [u8], opts: &CodecOptions) -> FieldStep<'a> {
        match name {
            "count" => {
                let d = decode_field::<u64>(input, opts);
                match d.result {
                    Ok(v) => {
                        self.count = Some(v);
                        FieldStep::Consumed(d.rest)
                    }
                    Err(_) => FieldStep::Malformed(d.rest),
                }
            }
            _ => FieldStep::Unknown,
        }
    }

    fn finish(self, _opts: &CodecOptions) -> Result<Probe, DecodeError> {
        Ok(Probe { count: self.count })
    }
}

impl Decode for Probe {
    fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
        decode_record(ProbeBuilder::default(), input, opts)
    }
}

fuzz_target!(|data: &[u8]| {
    for opts in [
        CodecOptions::default(),
        CodecOptions::default()
            .with_skip_missing_properties(false)
            .with_null_decode_as_empty(false),
    ] {
        let _ = from_slice::<f64>(data, &opts);
        let _ = from_slice::<i128>(data, &opts);
        let _ = from_slice::<bool>(data, &opts);
        let _ = from_slice::<String>(data, &opts);
        let _ = from_slice::<Vec<i64>>(data, &opts);
        let _ = from_slice::<(u32, String)>(data, &opts);
        let _ = from_slice::<Probe>(data, &opts);
    }
});
