use vectrex_core::cpu::m6809::{CcFlag, M6809};

mod common;
use common::TestBus;

fn flag(cpu: &M6809, f: CcFlag) -> bool {
    cpu.cc & f as u8 != 0
}

#[test]
fn test_neg_register() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x40]); // NEGA
    cpu.a = 0x01;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0xFF);
    assert!(flag(&cpu, CcFlag::N));
    assert!(flag(&cpu, CcFlag::C), "nonzero input borrows from zero");
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn test_neg_of_0x80_overflows() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x40]); // NEGA
    cpu.a = 0x80;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x80, "-(-128) wraps back to -128");
    assert!(flag(&cpu, CcFlag::V), "negating $80 sets V");
    assert!(flag(&cpu, CcFlag::C));
}

#[test]
fn test_neg_of_zero() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x50]); // NEGB
    cpu.b = 0x00;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.b, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::C), "negating zero has no borrow");
}

#[test]
fn test_neg_memory_direct() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x30] = 0x01;
    bus.load(0x100, &[0x00, 0x30]); // NEG <$30
    cpu.pc = 0x100;

    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(bus.memory[0x30], 0xFF);
    assert_eq!(cycles, 6);
}

#[test]
fn test_com() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x43]); // COMA
    cpu.a = 0b1010_0101;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0b0101_1010);
    assert!(flag(&cpu, CcFlag::C), "COM always sets C");
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn test_clr_register_and_memory() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x2000] = 0x7F;
    bus.load(0, &[0x4F, 0x7F, 0x20, 0x00]); // CLRA; CLR $2000
    cpu.a = 0xFF;
    cpu.cc = CcFlag::C as u8 | CcFlag::N as u8;

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::V));

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(bus.memory[0x2000], 0, "CLR writes zero to the EA");
}

#[test]
fn test_inc_wraps_and_sets_overflow_on_zero() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x4C]); // INCA
    cpu.a = 0xFF;
    cpu.cc = CcFlag::C as u8;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(flag(&cpu, CcFlag::V), "wrap to zero sets V");
    assert!(flag(&cpu, CcFlag::C), "INC leaves C untouched");
}

#[test]
fn test_dec_of_0x80_sets_overflow() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x4A]); // DECA
    cpu.a = 0x80;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x7F);
    assert!(flag(&cpu, CcFlag::V), "decrementing $80 sets V");
    assert!(!flag(&cpu, CcFlag::N));
}

#[test]
fn test_dec_leaves_carry() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x5A]); // DECB
    cpu.b = 0x01;
    cpu.cc = CcFlag::C as u8;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.b, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(flag(&cpu, CcFlag::C), "DEC leaves C untouched");
}

#[test]
fn test_tst_memory_is_read_only() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x2000] = 0x80;
    bus.load(0, &[0x7D, 0x20, 0x00]); // TST $2000

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(bus.memory[0x2000], 0x80, "TST must not write back");
    assert!(flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn test_sex_extends_sign() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x1D, 0x1D]); // SEX twice
    cpu.b = 0x80;

    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0xFF);
    assert!(flag(&cpu, CcFlag::N));

    cpu.b = 0x7F;
    cpu.execute_one(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x00);
    assert!(!flag(&cpu, CcFlag::N));
}

#[test]
fn test_abx_is_unsigned_and_flagless() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x3A]); // ABX
    cpu.x = 0x1000;
    cpu.b = 0xFF;
    cpu.cc = 0;

    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.x, 0x10FF, "B is added unsigned");
    assert_eq!(cpu.cc, 0, "ABX touches no flags");
}

#[test]
fn test_daa_adjusts_bcd_sum() {
    // 0x19 + 0x28 = 0x41 binary; DAA corrects to 0x47 BCD
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(
        0,
        &[
            0x86, 0x19, // LDA #$19
            0x8B, 0x28, // ADDA #$28
            0x19, // DAA
        ],
    );

    cpu.execute_one(&mut bus).unwrap();
    cpu.execute_one(&mut bus).unwrap();
    cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cpu.a, 0x47);
    assert!(!flag(&cpu, CcFlag::C));
}

#[test]
fn test_nop_costs_two_cycles() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x12]); // NOP

    let before = cpu.snapshot();
    let cycles = cpu.execute_one(&mut bus).unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc, 1);
    assert_eq!(cpu.cc, before.cc);
}

#[test]
fn test_every_instruction_costs_at_least_one_cycle() {
    // Sweep a spread of valid opcodes; the cycle floor is architectural.
    let programs: &[&[u8]] = &[
        &[0x12],
        &[0x86, 0x01],
        &[0x4F],
        &[0x3A],
        &[0x20, 0x00],
        &[0x34, 0x00],
        &[0x1F, 0x12],
        &[0xA6, 0x84],
    ];
    for program in programs {
        let mut cpu = M6809::new();
        let mut bus = TestBus::new();
        bus.load(0, program);
        cpu.x = 0x4000;
        let cycles = cpu.execute_one(&mut bus).unwrap();
        assert!(cycles >= 1, "opcode {:#04X} returned zero cycles", program[0]);
    }
}

#[test]
fn test_illegal_opcode_faults() {
    use vectrex_core::cpu::m6809::CpuFault;

    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x100, &[0x3F]); // SWI: not part of the supported set
    cpu.pc = 0x100;

    let result = cpu.execute_one(&mut bus);
    assert!(matches!(
        result,
        Err(CpuFault::IllegalOpcode {
            page: 0,
            opcode: 0x3F,
            addr: 0x100
        })
    ));
}
