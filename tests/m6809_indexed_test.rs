use vectrex_core::cpu::m6809::{CpuFault, M6809};

mod common;
use common::TestBus;

const LDA_INDEXED_BASE: u32 = 4;

#[test]
fn test_post_increment_by_one() {
    // X=$1000, mem[$1000]=$AA: LDA ,X+ loads then bumps X
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1000] = 0xAA;
    bus.load(0, &[0xA6, 0x80]); // LDA ,X+
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0xAA);
    assert_eq!(cpu.x, 0x1001, "X increments after the access");
    assert_eq!(cycles, LDA_INDEXED_BASE + 2);
}

#[test]
fn test_post_increment_by_two() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1000] = 0x55;
    bus.load(0, &[0xA6, 0x81]); // LDA ,X++
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x55);
    assert_eq!(cpu.x, 0x1002);
    assert_eq!(cycles, LDA_INDEXED_BASE + 3);
}

#[test]
fn test_pre_decrement_by_one() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0FFF] = 0x77;
    bus.load(0, &[0xA6, 0x82]); // LDA ,-X
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x77);
    assert_eq!(cpu.x, 0x0FFF, "X decrements before the access");
    assert_eq!(cycles, LDA_INDEXED_BASE + 2);
}

#[test]
fn test_pre_decrement_by_two() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0FFE] = 0x66;
    bus.load(0, &[0xA6, 0x83]); // LDA ,--X
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x66);
    assert_eq!(cpu.x, 0x0FFE);
    assert_eq!(cycles, LDA_INDEXED_BASE + 3);
}

#[test]
fn test_no_offset() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1234] = 0x99;
    bus.load(0, &[0xA6, 0x84]); // LDA ,X
    cpu.x = 0x1234;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x99);
    assert_eq!(cpu.x, 0x1234, "plain ,R leaves the register alone");
    assert_eq!(cycles, LDA_INDEXED_BASE);
}

#[test]
fn test_five_bit_offset_positive_and_negative() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x100F] = 0x01;
    bus.memory[0x0FF0] = 0x02;
    bus.load(
        0,
        &[
            0xA6, 0x0F, // LDA 15,X
            0xA6, 0x10, // LDA -16,X
        ],
    );
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x01);
    assert_eq!(cycles, LDA_INDEXED_BASE + 1);

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x02, "bit 4 is the sign of the 5-bit offset");
}

#[test]
fn test_accumulator_offsets_are_signed() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0FFF] = 0x11; // X + (-1)
    bus.memory[0x1005] = 0x22; // X + 5
    bus.load(
        0,
        &[
            0xA6, 0x85, // LDA B,X
            0xE6, 0x86, // LDB A,X
        ],
    );
    cpu.x = 0x1000;
    cpu.b = 0xFF; // -1

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x11, "B offset sign-extends");
    assert_eq!(cycles, LDA_INDEXED_BASE + 1);

    cpu.a = 0x05;
    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.b, 0x22, "A offset sign-extends");
}

#[test]
fn test_d_offset() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1100] = 0x42;
    bus.load(0, &[0xE6, 0x8B]); // LDB D,X
    cpu.x = 0x1000;
    cpu.a = 0x01;
    cpu.b = 0x00; // D = $0100

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.b, 0x42);
    assert_eq!(cycles, LDA_INDEXED_BASE + 4);
}

#[test]
fn test_eight_and_sixteen_bit_offsets() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0FF0] = 0x31; // X - 16
    bus.memory[0x1800] = 0x32; // X + $0800
    bus.load(
        0,
        &[
            0xA6, 0x88, 0xF0, // LDA -16,X (8-bit offset)
            0xA6, 0x89, 0x08, 0x00, // LDA $0800,X (16-bit offset)
        ],
    );
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x31);
    assert_eq!(cycles, LDA_INDEXED_BASE + 1);

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x32);
    assert_eq!(cycles, LDA_INDEXED_BASE + 4);
}

#[test]
fn test_pc_relative_offsets() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    // After the offset byte, PC = 3; EA = PC + 5 = 8
    bus.load(0x0, &[0xA6, 0x8C, 0x05]); // LDA 5,PCR
    bus.memory[0x0008] = 0x21;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x21, "PC-relative measures from past the operand");
    assert_eq!(cycles, LDA_INDEXED_BASE + 1);
}

#[test]
fn test_pc_relative_sixteen_bit() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    // After the two offset bytes, PC = 4; EA = 4 + $0100 = $0104
    bus.load(0, &[0xA6, 0x8D, 0x01, 0x00]); // LDA $0100,PCR
    bus.memory[0x0104] = 0x43;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x43);
    assert_eq!(cycles, LDA_INDEXED_BASE + 5);
}

#[test]
fn test_indirect_through_pointer() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1000] = 0x20; // pointer at ,X
    bus.memory[0x1001] = 0x00;
    bus.memory[0x2000] = 0x77;
    bus.load(0, &[0xA6, 0x94]); // LDA [,X]
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x77);
    assert_eq!(cycles, LDA_INDEXED_BASE + 3, "indirection adds 3 cycles");
}

#[test]
fn test_indirect_post_increment_by_two() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1000] = 0x20;
    bus.memory[0x1001] = 0x10;
    bus.memory[0x2010] = 0x88;
    bus.load(0, &[0xA6, 0x91]); // LDA [,X++]
    cpu.x = 0x1000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x88);
    assert_eq!(cpu.x, 0x1002);
    assert_eq!(cycles, LDA_INDEXED_BASE + 3 + 3);
}

#[test]
fn test_extended_indirect() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x3000] = 0x40;
    bus.memory[0x3001] = 0x00;
    bus.memory[0x4000] = 0x99;
    bus.load(0, &[0xA6, 0x9F, 0x30, 0x00]); // LDA [$3000]

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x99);
    assert_eq!(cycles, LDA_INDEXED_BASE + 5);
}

#[test]
fn test_register_selection_bits() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x1000] = 0x01;
    bus.memory[0x2000] = 0x02;
    bus.memory[0x3000] = 0x03;
    bus.memory[0x4000] = 0x04;
    bus.load(
        0,
        &[
            0xA6, 0x84, // LDA ,X
            0xA6, 0xA4, // LDA ,Y
            0xA6, 0xC4, // LDA ,U
            0xA6, 0xE4, // LDA ,S
        ],
    );
    cpu.x = 0x1000;
    cpu.y = 0x2000;
    cpu.u = 0x3000;
    cpu.s = 0x4000;

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x01);
    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x02);
    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x03);
    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x04);
}

#[test]
fn test_illegal_postbyte_faults() {
    for postbyte in [0x87u8, 0x8A, 0x8E] {
        let mut cpu = M6809::new();
        let mut bus = TestBus::new();
        bus.load(0x200, &[0xA6, postbyte]);
        cpu.pc = 0x200;

        let result = cpu.execute_one(&mut bus);
        assert!(
            matches!(
                result,
                Err(CpuFault::IllegalIndexedMode {
                    postbyte: p,
                    addr: 0x201
                }) if p == postbyte
            ),
            "post-byte {postbyte:#04X} must fault"
        );
    }
}

#[test]
fn test_store_indexed_auto_increment() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xA7, 0x80, 0xA7, 0x80]); // STA ,X+ twice
    cpu.a = 0x5A;
    cpu.x = 0x3000;

    cpu.execute_one(&mut bus).unwrap();
    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(bus.memory[0x3000], 0x5A);
    assert_eq!(bus.memory[0x3001], 0x5A);
    assert_eq!(cpu.x, 0x3002);
}
