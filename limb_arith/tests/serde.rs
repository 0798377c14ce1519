#![cfg(feature = "serde")]

use limb_arith::{add_with_carry, sub_with_borrow, DiffBorrow, SumCarry};

#[test]
fn test_result_pairs_bincode() {
    let sum = add_with_carry(u64::MAX, 2, 1);
    let bytes = bincode::serialize(&sum).unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(bincode::deserialize::<SumCarry<u64>>(&bytes).unwrap(), sum);

    let diff = sub_with_borrow(0u16, 1, 0);
    let bytes = bincode::serialize(&diff).unwrap();
    assert_eq!(bincode::deserialize::<DiffBorrow<u16>>(&bytes).unwrap(), diff);
}
