//! Record fixtures shared by the integration tests.
//!
//! A host normally generates the builder plumbing from record definitions;
//! the macro below plays that role for required-field records, and
//! `OptionalOwner` shows the hand-written shape for an optional field.
#![allow(dead_code)]

use jsonshape::{
    decode_field, decode_record, BuildRecord, CodecOptions, Decode, DecodeError, Decoded, Encode,
    FieldStep, RecordWriter,
};

macro_rules! record_codec {
    (
        struct $name:ident / $builder:ident {
            $($field:ident as $key:literal : $ty:ty),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(pub $field: $ty,)+
        }

        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)+
        }

        impl BuildRecord for $builder {
            type Value = $name;

            fn field<'a>(
                &mut self,
                name: &str,
                input: &'a [u8],
                opts: &CodecOptions,
            ) -> FieldStep<'a> {
                match name {
                    $($key => {
                        let d = decode_field::<$ty>(input, opts);
                        match d.result {
                            Ok(value) => {
                                self.$field = Some(value);
                                FieldStep::Consumed(d.rest)
                            }
                            Err(_) => FieldStep::Malformed(d.rest),
                        }
                    })+
                    _ => FieldStep::Unknown,
                }
            }

            fn finish(self, _opts: &CodecOptions) -> Result<$name, DecodeError> {
                Ok($name {
                    $($field: self.$field.ok_or(DecodeError::TooShort)?,)+
                })
            }
        }

        impl Decode for $name {
            fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
                decode_record($builder::default(), input, opts)
            }
        }

        impl Encode for $name {
            fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
                let mut rec = RecordWriter::begin(buf, opts);
                $(rec.field($key, &self.$field);)+
                rec.end();
            }
        }
    };
}

record_codec!(struct Named / NamedBuilder {
    name as "name": String,
});

record_codec!(struct Farm / FarmBuilder {
    fruit_count as "fruitCount": u32,
    owner_name as "ownerName": String,
});

record_codec!(struct OwnerOnly / OwnerOnlyBuilder {
    owner_name as "ownerName": String,
});

record_codec!(struct Thumbnail / ThumbnailBuilder {
    height as "height": u32,
    url as "url": String,
    width as "width": u32,
});

record_codec!(struct Image / ImageBuilder {
    animated as "animated": bool,
    height as "height": u32,
    ids as "ids": Vec<u64>,
    thumbnail as "thumbnail": Thumbnail,
    title as "title": String,
    width as "width": u32,
});

record_codec!(struct ImageDoc / ImageDocBuilder {
    image as "image": Image,
});

/// A record whose single field tolerates `null` and absence alike.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalOwner {
    pub owner_name: Option<String>,
}

#[derive(Default)]
pub struct OptionalOwnerBuilder {
    owner_name: Option<Option<String>>,
}

impl BuildRecord for OptionalOwnerBuilder {
    type Value = OptionalOwner;

    fn field<'a>(&mut self, name: &str, input: &'a [u8], opts: &CodecOptions) -> FieldStep<'a> {
        match name {
            "ownerName" => {
                let d = decode_field::<Option<String>>(input, opts);
                match d.result {
                    Ok(value) => {
                        self.owner_name = Some(value);
                        FieldStep::Consumed(d.rest)
                    }
                    Err(_) => FieldStep::Malformed(d.rest),
                }
            }
            _ => FieldStep::Unknown,
        }
    }

    fn finish(self, _opts: &CodecOptions) -> Result<OptionalOwner, DecodeError> {
        Ok(OptionalOwner {
            owner_name: self.owner_name.unwrap_or(None),
        })
    }
}

impl Decode for OptionalOwner {
    fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
        decode_record(OptionalOwnerBuilder::default(), input, opts)
    }
}

impl Encode for OptionalOwner {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        let mut rec = RecordWriter::begin(buf, opts);
        rec.field("ownerName", &self.owner_name);
        rec.end();
    }
}

pub fn farm() -> Farm {
    Farm {
        fruit_count: 2,
        owner_name: "Farmer Joe".into(),
    }
}
