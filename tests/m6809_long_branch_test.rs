use vectrex_core::cpu::m6809::{CcFlag, M6809};

mod common;
use common::TestBus;

#[test]
fn test_lbra_always_taken() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x16, 0x01, 0x00]); // LBRA +$0100
    cpu.pc = 0x100;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.pc, 0x203);
    assert_eq!(cycles, 5);
}

#[test]
fn test_lbra_negative_offset() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x200, &[0x16, 0xFF, 0x00]); // LBRA -$0100
    cpu.pc = 0x200;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.pc, 0x103);
}

#[test]
fn test_lbeq_taken_and_not_taken() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x10, 0x27, 0x00, 0x10]); // LBEQ +$10
    cpu.pc = 0x100;
    cpu.cc = CcFlag::Z as u8;

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x114);
    assert_eq!(cycles, 6, "taken long branch costs the extra cycle");

    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x10, 0x27, 0x00, 0x10]);
    cpu.pc = 0x100;
    cpu.cc = 0;

    let cycles = cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x104, "not taken falls through");
    assert_eq!(cycles, 5);
}

#[test]
fn test_lbrn_is_a_long_nop() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x10, 0x21, 0x7F, 0xFF]); // LBRN
    cpu.pc = 0x100;
    cpu.cc = 0xFF;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.pc, 0x104, "LBRN never branches");
}

#[test]
fn test_long_branch_signed_conditions() {
    // LBLT with N != V must take the branch.
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x10, 0x2D, 0x00, 0x20]); // LBLT +$20
    cpu.pc = 0x100;
    cpu.cc = CcFlag::N as u8;

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x124);

    // LBGE with N == V == 1 must also take.
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x10, 0x2C, 0x00, 0x20]); // LBGE +$20
    cpu.pc = 0x100;
    cpu.cc = CcFlag::N as u8 | CcFlag::V as u8;

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x124);
}

#[test]
fn test_lbsr_pushes_return_address() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x17, 0x02, 0x00]); // LBSR +$0200
    cpu.pc = 0x100;
    cpu.s = 0xC000;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.pc, 0x303);
    assert_eq!(cpu.s, 0xBFFE);
    assert_eq!(bus.memory[0xBFFE], 0x01);
    assert_eq!(bus.memory[0xBFFF], 0x03);
    assert_eq!(cycles, 9);
}

#[test]
fn test_lbsr_rts_round_trip() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x17, 0x01, 0x00]); // LBSR +$0100 -> $203
    bus.load(0x203, &[0x39]); // RTS
    cpu.pc = 0x100;
    cpu.s = 0xC000;

    cpu.execute_one(&mut bus).unwrap();
    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.pc, 0x103);
    assert_eq!(cpu.s, 0xC000);
}
