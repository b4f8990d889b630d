mod property_roundtrip;
mod property_suppression;
mod snapshot_transcript;
