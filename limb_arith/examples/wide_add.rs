use limb_arith::{add_limbs, capabilities, capability::log_capabilities, sub_limbs, BACKEND};

// 256-bit values as four little-endian u64 limbs.
type U256 = [u64; 4];

fn hex(value: &U256) -> String {
    value.iter().rev().map(|limb| format!("{limb:016x}")).collect::<Vec<_>>().join("_")
}

fn main() -> Result<(), limb_arith::LimbError> {
    env_logger::builder()
        .format_timestamp(None)
        .format_level(true)
        .format_target(false)
        .filter_level(log::LevelFilter::Debug)
        .init();
    log_capabilities();

    println!("backend: {BACKEND}");
    for cap in capabilities() {
        println!("{:>5}: add {}, sub {}", cap.width, cap.add, cap.sub);
    }

    let a: U256 = [u64::MAX, u64::MAX, u64::MAX, 0x7fff_ffff_ffff_ffff];
    let b: U256 = [1, 0, 0, 0];

    let mut sum = a;
    let carry = add_limbs(&mut sum, &b, 0)?;
    println!("{} + {} = {} (carry {carry})", hex(&a), hex(&b), hex(&sum));

    let mut diff = sum;
    let borrow = sub_limbs(&mut diff, &b, 0)?;
    println!("{} - {} = {} (borrow {borrow})", hex(&sum), hex(&b), hex(&diff));
    assert_eq!(diff, a);

    Ok(())
}
