#![allow(dead_code)]

/// Frame a header chunk.
pub fn header(format: u16, num_tracks: u16, division: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&num_tracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    bytes
}

/// Frame a track chunk whose length matches `body`.
pub fn track_chunk(body: &[u8]) -> Vec<u8> {
    track_chunk_with_length(body, body.len() as u32)
}

/// Frame a track chunk with an arbitrary declared length.
pub fn track_chunk_with_length(body: &[u8], length: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// A whole file from a header and track bodies.
pub fn file(format: u16, division: u16, bodies: &[&[u8]]) -> Vec<u8> {
    let mut bytes = header(format, bodies.len() as u16, division);
    for body in bodies {
        bytes.extend(track_chunk(body));
    }
    bytes
}

pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];
