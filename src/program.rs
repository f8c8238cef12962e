pub const OUTPUT_PATH: &str = "prog.bin";

// start:
pub const PROGRAM: [u8; 12] = [
    0x3A, 0x77, 0x77, // lda 0x7777
    0x06, 0x02, // mvi b, 0x02
    0x16, 0x04, // mvi d, 0x04
    0x0C, // inr c
    0xC2, 0x00, 0x09, // jmp start
    0x76, // hlt
];

pub const LOAD_ADDR: u16 = 0x0800;
pub const STACK_SEGMENT_START: u16 = 0xE000; // 8KB stack segment

const _: () = assert!(
    LOAD_ADDR as usize + PROGRAM.len() < STACK_SEGMENT_START as usize,
    "program doesn't fit into memory"
);
