//! Staxie buffer builder shared by the integration tests.

#![allow(dead_code)]

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Builds a `stAx` payload field by field.
pub struct StaxieBuilder {
    payload: Vec<u8>,
}

impl StaxieBuilder {
    pub fn new(frame_width: u16, frame_height: u16, stack_count: u16) -> Self {
        let mut payload = vec![0];
        payload.extend_from_slice(&frame_width.to_be_bytes());
        payload.extend_from_slice(&frame_height.to_be_bytes());
        payload.extend_from_slice(&stack_count.to_be_bytes());
        Self { payload }
    }

    fn name(&mut self, name: &str) {
        self.payload.push(name.len() as u8);
        self.payload.extend_from_slice(name.as_bytes());
    }

    pub fn stack(mut self, name: &str, slice_count: u16, animation_count: u16) -> Self {
        self.name(name);
        self.payload.extend_from_slice(&slice_count.to_be_bytes());
        self.payload.extend_from_slice(&animation_count.to_be_bytes());
        self
    }

    pub fn animation(mut self, name: &str, frame_time: u32, frame_count: u16) -> Self {
        self.name(name);
        self.payload.extend_from_slice(&frame_time.to_be_bytes());
        self.payload.extend_from_slice(&frame_count.to_be_bytes());
        self
    }

    pub fn frame(mut self, shades: &[u8]) -> Self {
        self.payload.extend_from_slice(shades);
        self
    }

    /// Signature, an ignored leading chunk, the `stAx` chunk and an `IEND`.
    pub fn build(self) -> Vec<u8> {
        let mut out = SIGNATURE.to_vec();
        push_chunk(&mut out, b"IHDR", &[0; 13]);
        push_chunk(&mut out, b"stAx", &self.payload);
        push_chunk(&mut out, b"IEND", &[]);
        out
    }
}

pub fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0, 0, 0, 0]);
}

/// One stack "top" with one animation "attack": 100 time units per frame,
/// two frames of two slices.
pub fn attack_sheet_bytes() -> Vec<u8> {
    StaxieBuilder::new(16, 16, 1)
        .stack("top", 2, 1)
        .animation("attack", 100, 2)
        .frame(&[255, 128])
        .frame(&[64, 0])
        .build()
}

/// Two stacks sharing an "idle" animation; only "top" has "attack".
pub fn two_stack_sheet_bytes() -> Vec<u8> {
    StaxieBuilder::new(8, 8, 2)
        .stack("top", 2, 2)
        .animation("idle", 50, 3)
        .frame(&[10, 20])
        .frame(&[30, 40])
        .frame(&[50, 60])
        .animation("attack", 100, 2)
        .frame(&[1, 2])
        .frame(&[3, 4])
        .stack("side", 1, 1)
        .animation("idle", 25, 2)
        .frame(&[5])
        .frame(&[6])
        .build()
}
